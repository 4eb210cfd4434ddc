//! DDL assembly: schema snapshot in, ordered statement strings out.

mod column;
mod foreign_key;
mod index;
mod table;

pub use column::render_column;
pub use foreign_key::render_foreign_key;
pub use index::render_create_index;
pub use table::render_create_table;

use thiserror::Error;

use crate::dialect::Dialect;
use crate::order::order_tables;
use crate::schema::{KeyPart, Schema, TableDef};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DdlError {
    #[error("unresolved table id: {id}")]
    UnresolvedTable { id: String },
    #[error("unresolved column id {column} in table {table}")]
    UnresolvedColumn { table: String, column: String },
    #[error("cyclic interleaving through table {id}")]
    CyclicInterleaving { id: String },
    #[error("unsupported dialect: {0}")]
    UnsupportedDialect(String),
}

/// Which statement classes to emit, and for which dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub tables: bool,
    pub foreign_keys: bool,
    pub dialect: Dialect,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tables: true,
            foreign_keys: true,
            dialect: Dialect::default(),
        }
    }
}

/// Statement-class selection used at the CLI and WASM boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmitMode {
    Tables,
    ForeignKeys,
    #[default]
    All,
}

impl EmitMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "tables" => Some(Self::Tables),
            "fks" | "foreign_keys" => Some(Self::ForeignKeys),
            "all" => Some(Self::All),
            _ => None,
        }
    }
}

impl Config {
    pub fn for_mode(mode: EmitMode, dialect: Dialect) -> Self {
        let (tables, foreign_keys) = match mode {
            EmitMode::Tables => (true, false),
            EmitMode::ForeignKeys => (false, true),
            EmitMode::All => (true, true),
        };
        Self {
            tables,
            foreign_keys,
            dialect,
        }
    }
}

/// Generate the DDL statements for a schema, stopping at the first error.
///
/// Table statements come out in interleaving order, each followed by its
/// index statements; foreign keys follow as ALTER TABLE statements over
/// tables in lexicographic id order. Output is byte-stable for a given
/// schema and config.
pub fn get_ddl(schema: &Schema, config: &Config) -> Result<Vec<String>, DdlError> {
    let mut statements = Vec::new();

    if config.tables {
        let order = order_tables(schema)?;
        tracing::debug!(table_count = order.len(), "generating CREATE TABLE statements");
        for id in &order {
            let table = schema.table(id).ok_or_else(|| DdlError::UnresolvedTable {
                id: id.to_string(),
            })?;
            statements.push(render_create_table(table, schema, config.dialect)?);
            for index in &table.indexes {
                statements.push(render_create_index(index, table, config.dialect)?);
            }
        }
    }

    if config.foreign_keys {
        for id in schema.table_ids() {
            let table = schema.table(id).ok_or_else(|| DdlError::UnresolvedTable {
                id: id.to_string(),
            })?;
            tracing::debug!(table = %table.name, fk_count = table.foreign_keys.len(), "generating ALTER TABLE statements");
            for fk in &table.foreign_keys {
                statements.push(render_foreign_key(fk, table, schema, config.dialect)?);
            }
        }
    }

    Ok(statements)
}

/// Tolerant variant of [`get_ddl`]: a table or foreign key that fails to
/// render is skipped and its error collected, so one broken reference does
/// not lose the rest of the schema. A cyclic parent chain is still fatal
/// (no table order exists).
pub fn get_ddl_partial(schema: &Schema, config: &Config) -> (Vec<String>, Vec<DdlError>) {
    let mut statements = Vec::new();
    let mut errors = Vec::new();

    if config.tables {
        let order = match order_tables(schema) {
            Ok(order) => order,
            Err(e) => return (statements, vec![e]),
        };
        for id in &order {
            let Some(table) = schema.table(id) else {
                errors.push(DdlError::UnresolvedTable { id: id.to_string() });
                continue;
            };
            match render_create_table(table, schema, config.dialect) {
                Ok(stmt) => statements.push(stmt),
                Err(e) => {
                    errors.push(e);
                    continue;
                }
            }
            for index in &table.indexes {
                match render_create_index(index, table, config.dialect) {
                    Ok(stmt) => statements.push(stmt),
                    Err(e) => errors.push(e),
                }
            }
        }
    }

    if config.foreign_keys {
        for id in schema.table_ids() {
            let Some(table) = schema.table(id) else {
                errors.push(DdlError::UnresolvedTable { id: id.to_string() });
                continue;
            };
            for fk in &table.foreign_keys {
                match render_foreign_key(fk, table, schema, config.dialect) {
                    Ok(stmt) => statements.push(stmt),
                    Err(e) => errors.push(e),
                }
            }
        }
    }

    (statements, errors)
}

/// Generate the DDL and join it into one report string.
pub fn print_ddl(schema: &Schema, config: &Config) -> Result<String, DdlError> {
    Ok(get_ddl(schema, config)?.join("\n\n"))
}

/// Render a primary-key or index key list: `<quoted-col>[ DESC], ...`,
/// sorted by explicit position. The sort is stable, so equal positions keep
/// their sequence order.
pub(crate) fn render_key_list(
    keys: &[KeyPart],
    table: &TableDef,
    dialect: Dialect,
) -> Result<String, DdlError> {
    let mut ordered: Vec<&KeyPart> = keys.iter().collect();
    ordered.sort_by_key(|k| k.order);

    let mut parts = Vec::with_capacity(ordered.len());
    for key in ordered {
        let name = table
            .column_name(&key.col_id)
            .ok_or_else(|| DdlError::UnresolvedColumn {
                table: table.id.clone(),
                column: key.col_id.clone(),
            })?;
        let mut part = dialect.quote(name);
        if key.desc {
            part.push_str(" DESC");
        }
        parts.push(part);
    }
    Ok(parts.join(", "))
}
