//! Foreign keys as ALTER TABLE statements.

use super::DdlError;
use crate::dialect::Dialect;
use crate::schema::{ForeignKeyDef, Schema, TableDef};

/// Render `ALTER TABLE <table> ADD [CONSTRAINT <name> ]FOREIGN KEY (<cols>)
/// REFERENCES <refTable> (<refCols>)[ ON DELETE ...][ ON UPDATE ...]`.
///
/// Both column-id lists resolve through the full schema: the owning table's
/// columns and the referenced table's columns live in separate id
/// namespaces.
pub fn render_foreign_key(
    fk: &ForeignKeyDef,
    table: &TableDef,
    schema: &Schema,
    dialect: Dialect,
) -> Result<String, DdlError> {
    let refer_table =
        schema
            .table(&fk.refer_table_id)
            .ok_or_else(|| DdlError::UnresolvedTable {
                id: fk.refer_table_id.clone(),
            })?;

    let cols = resolve_columns(&fk.col_ids, table, dialect)?;
    let refer_cols = resolve_columns(&fk.refer_col_ids, refer_table, dialect)?;

    let constraint = if fk.name.is_empty() {
        "FOREIGN KEY".to_string()
    } else {
        format!("CONSTRAINT {} FOREIGN KEY", dialect.quote(&fk.name))
    };

    let mut stmt = format!(
        "ALTER TABLE {} ADD {} ({}) REFERENCES {} ({})",
        dialect.quote(&table.name),
        constraint,
        cols.join(", "),
        dialect.quote(&refer_table.name),
        refer_cols.join(", ")
    );
    if let Some(action) = &fk.on_delete {
        stmt.push_str(&format!(" ON DELETE {}", action));
    }
    if let Some(action) = &fk.on_update {
        stmt.push_str(&format!(" ON UPDATE {}", action));
    }
    stmt.push_str(dialect.terminator());
    Ok(stmt)
}

fn resolve_columns(
    col_ids: &[String],
    table: &TableDef,
    dialect: Dialect,
) -> Result<Vec<String>, DdlError> {
    col_ids
        .iter()
        .map(|col_id| {
            table
                .column_name(col_id)
                .map(|name| dialect.quote(name))
                .ok_or_else(|| DdlError::UnresolvedColumn {
                    table: table.id.clone(),
                    column: col_id.clone(),
                })
        })
        .collect()
}
