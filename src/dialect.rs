//! Target dialect policies: quoting, type names, key placement, generated
//! columns.

use crate::schema::{AutoGen, GenerationKind, Type};

/// SQL dialect variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum Dialect {
    /// Spanner GoogleSQL flavor
    #[default]
    GoogleSql,
    /// Spanner PostgreSQL flavor
    Postgres,
    /// MySQL flavor, used to re-print source schemas for reports
    MysqlSource,
}

/// Where the PRIMARY KEY clause goes in a CREATE TABLE statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PkPlacement {
    /// After the closing parenthesis (GoogleSQL).
    Trailing,
    /// Last item inside the column list (PostgreSQL, MySQL).
    Inline,
}

impl Dialect {
    /// Parse dialect from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "googlesql" | "google_standard_sql" | "spanner" => Some(Self::GoogleSql),
            "postgres" | "postgresql" | "pg" => Some(Self::Postgres),
            "mysql" | "source" => Some(Self::MysqlSource),
            _ => None,
        }
    }

    /// Quote an identifier. Applied to every identifier emitted, including
    /// the ones inside foreign-key clauses.
    pub fn quote(&self, ident: &str) -> String {
        match self {
            Self::GoogleSql | Self::Postgres => ident.to_string(),
            Self::MysqlSource => format!("`{}`", ident),
        }
    }

    /// Dialect spelling of a semantic type name. Unknown names pass through
    /// unchanged, so a source schema carrying dialect-native names re-prints
    /// as-is.
    pub fn type_name(&self, typ: &Type) -> String {
        let name = match self {
            Self::GoogleSql => match typ.name.as_str() {
                "Int64" => "INT64",
                "Float32" => "FLOAT32",
                "Float64" => "FLOAT64",
                "Bool" => "BOOL",
                "String" => "STRING",
                "Bytes" => "BYTES",
                "Numeric" => "NUMERIC",
                "Timestamp" => "TIMESTAMP",
                "Date" => "DATE",
                "Json" => "JSON",
                other => other,
            },
            Self::Postgres => match typ.name.as_str() {
                "Int64" => "INT8",
                "Float32" => "FLOAT4",
                "Float64" => "FLOAT8",
                "Bool" => "BOOL",
                "String" => "VARCHAR",
                "Bytes" => "BYTEA",
                "Numeric" => "NUMERIC",
                "Timestamp" => "TIMESTAMPTZ",
                "Date" => "DATE",
                "Json" => "JSONB",
                other => other,
            },
            Self::MysqlSource => match typ.name.as_str() {
                "Int64" => "BIGINT",
                "Float32" => "FLOAT",
                "Float64" => "DOUBLE",
                "Bool" => "BOOL",
                "String" => "VARCHAR",
                "Bytes" => "VARBINARY",
                "Numeric" => "DECIMAL",
                "Timestamp" => "TIMESTAMP",
                "Date" => "DATE",
                "Json" => "JSON",
                other => other,
            },
        };
        name.to_string()
    }

    pub fn pk_placement(&self) -> PkPlacement {
        match self {
            Self::GoogleSql => PkPlacement::Trailing,
            Self::Postgres | Self::MysqlSource => PkPlacement::Inline,
        }
    }

    /// Column suffix for an auto-generated value. Kinds a dialect has no
    /// template for render the empty string.
    pub fn auto_gen_suffix(&self, auto_gen: &AutoGen) -> String {
        match (self, auto_gen.kind) {
            (Self::GoogleSql, GenerationKind::Uuid) => {
                " DEFAULT (GENERATE_UUID())".to_string()
            }
            (Self::GoogleSql, GenerationKind::Sequence) => format!(
                " DEFAULT (GET_NEXT_SEQUENCE_VALUE(SEQUENCE {}))",
                auto_gen.name
            ),
            (Self::Postgres, GenerationKind::Uuid) => {
                " DEFAULT (spanner.generate_uuid())".to_string()
            }
            (Self::Postgres, GenerationKind::Sequence) => {
                format!(" DEFAULT nextval('{}')", auto_gen.name)
            }
            (Self::MysqlSource, GenerationKind::AutoIncrement) => " AUTO_INCREMENT".to_string(),
            _ => String::new(),
        }
    }

    /// Column suffix for an explicit default expression.
    pub fn default_clause(&self, expr: &str) -> String {
        match self {
            Self::GoogleSql => format!(" DEFAULT ({})", expr),
            Self::Postgres | Self::MysqlSource => format!(" DEFAULT {}", expr),
        }
    }

    /// Statement terminator. The MySQL report profile emits executable
    /// script text; the Spanner profiles leave statements bare.
    pub fn terminator(&self) -> &'static str {
        match self {
            Self::GoogleSql | Self::Postgres => "",
            Self::MysqlSource => ";",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(Dialect::from_str("googlesql"), Some(Dialect::GoogleSql));
        assert_eq!(Dialect::from_str("PostgreSQL"), Some(Dialect::Postgres));
        assert_eq!(Dialect::from_str("mysql"), Some(Dialect::MysqlSource));
        assert_eq!(Dialect::from_str("oracle"), None);
    }

    #[test]
    fn test_type_names() {
        let int64 = Type::new("Int64");
        assert_eq!(Dialect::GoogleSql.type_name(&int64), "INT64");
        assert_eq!(Dialect::Postgres.type_name(&int64), "INT8");
        assert_eq!(Dialect::MysqlSource.type_name(&int64), "BIGINT");

        // Source-native names pass through.
        let native = Type::new("MEDIUMINT");
        assert_eq!(Dialect::MysqlSource.type_name(&native), "MEDIUMINT");
    }

    #[test]
    fn test_quote() {
        assert_eq!(Dialect::GoogleSql.quote("t1"), "t1");
        assert_eq!(Dialect::MysqlSource.quote("t1"), "`t1`");
    }

    #[test]
    fn test_auto_gen_uuid() {
        let uuid = AutoGen {
            name: "UUID".to_string(),
            kind: GenerationKind::Uuid,
        };
        assert_eq!(
            Dialect::GoogleSql.auto_gen_suffix(&uuid),
            " DEFAULT (GENERATE_UUID())"
        );
        assert_eq!(
            Dialect::Postgres.auto_gen_suffix(&uuid),
            " DEFAULT (spanner.generate_uuid())"
        );
        // No UUID template under the MySQL report profile.
        assert_eq!(Dialect::MysqlSource.auto_gen_suffix(&uuid), "");
    }

    #[test]
    fn test_auto_gen_sequence() {
        let seq = AutoGen {
            name: "order_seq".to_string(),
            kind: GenerationKind::Sequence,
        };
        assert_eq!(
            Dialect::GoogleSql.auto_gen_suffix(&seq),
            " DEFAULT (GET_NEXT_SEQUENCE_VALUE(SEQUENCE order_seq))"
        );
        assert_eq!(
            Dialect::Postgres.auto_gen_suffix(&seq),
            " DEFAULT nextval('order_seq')"
        );
    }

    #[test]
    fn test_auto_increment() {
        let inc = AutoGen {
            name: String::new(),
            kind: GenerationKind::AutoIncrement,
        };
        assert_eq!(Dialect::MysqlSource.auto_gen_suffix(&inc), " AUTO_INCREMENT");
        assert_eq!(Dialect::GoogleSql.auto_gen_suffix(&inc), "");
    }
}
