//! CREATE INDEX rendering. Same shape in every dialect.

use super::{render_key_list, DdlError};
use crate::dialect::Dialect;
use crate::schema::{IndexDef, TableDef};

/// Render `CREATE [UNIQUE] INDEX <name> ON <table> (<keys>)`.
pub fn render_create_index(
    index: &IndexDef,
    table: &TableDef,
    dialect: Dialect,
) -> Result<String, DdlError> {
    let unique = if index.unique { "UNIQUE " } else { "" };
    let keys = render_key_list(&index.keys, table, dialect)?;
    Ok(format!(
        "CREATE {}INDEX {} ON {} ({}){}",
        unique,
        dialect.quote(&index.name),
        dialect.quote(&table.name),
        keys,
        dialect.terminator()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ColumnDef, KeyPart, Type};
    use std::collections::HashMap;

    fn table2() -> TableDef {
        let mut columns = HashMap::new();
        for (col_id, name) in [("c3", "b"), ("c4", "c")] {
            columns.insert(
                col_id.to_string(),
                ColumnDef {
                    name: name.to_string(),
                    id: col_id.to_string(),
                    typ: Type::new("Int64"),
                    ..Default::default()
                },
            );
        }
        TableDef {
            name: "table2".to_string(),
            id: "t2".to_string(),
            col_order: vec!["c3".to_string(), "c4".to_string()],
            columns,
            ..Default::default()
        }
    }

    fn index2() -> IndexDef {
        IndexDef {
            name: "index2".to_string(),
            table_id: "t2".to_string(),
            unique: true,
            keys: vec![
                KeyPart {
                    col_id: "c3".to_string(),
                    desc: true,
                    order: 1,
                },
                KeyPart {
                    col_id: "c4".to_string(),
                    desc: false,
                    order: 2,
                },
            ],
        }
    }

    #[test]
    fn test_unique_index_both_spanner_dialects() {
        let table = table2();
        let expected = "CREATE UNIQUE INDEX index2 ON table2 (b DESC, c)";
        assert_eq!(
            render_create_index(&index2(), &table, Dialect::GoogleSql).unwrap(),
            expected
        );
        assert_eq!(
            render_create_index(&index2(), &table, Dialect::Postgres).unwrap(),
            expected
        );
    }

    #[test]
    fn test_non_unique_index() {
        let table = table2();
        let mut index = index2();
        index.unique = false;
        index.name = "index1".to_string();
        assert_eq!(
            render_create_index(&index, &table, Dialect::GoogleSql).unwrap(),
            "CREATE INDEX index1 ON table2 (b DESC, c)"
        );
    }

    #[test]
    fn test_mysql_index_quoted_and_terminated() {
        let table = table2();
        assert_eq!(
            render_create_index(&index2(), &table, Dialect::MysqlSource).unwrap(),
            "CREATE UNIQUE INDEX `index2` ON `table2` (`b` DESC, `c`);"
        );
    }

    #[test]
    fn test_keys_sorted_by_position() {
        let table = table2();
        let mut index = index2();
        index.keys.reverse();
        assert_eq!(
            render_create_index(&index, &table, Dialect::GoogleSql).unwrap(),
            "CREATE UNIQUE INDEX index2 ON table2 (b DESC, c)"
        );
    }

    #[test]
    fn test_unknown_key_column_is_error() {
        let table = table2();
        let mut index = index2();
        index.keys[0].col_id = "c9".to_string();
        let err = render_create_index(&index, &table, Dialect::GoogleSql).unwrap_err();
        assert!(matches!(err, DdlError::UnresolvedColumn { .. }));
    }
}
