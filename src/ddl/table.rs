//! CREATE TABLE rendering, including the per-dialect primary-key fork and
//! interleaving clauses.

use super::column::render_column;
use super::{render_key_list, DdlError};
use crate::dialect::{Dialect, PkPlacement};
use crate::schema::{Schema, TableDef};

/// Render one CREATE TABLE statement.
///
/// Columns come out in `col_order`, then check constraints, then the
/// primary key — trailing the parenthesis for GoogleSQL, inline for the
/// PostgreSQL and MySQL profiles. Interleaved tables get an
/// `INTERLEAVE IN PARENT` clause under the Spanner profiles; a parent id
/// the schema cannot resolve renders the table as a root.
pub fn render_create_table(
    table: &TableDef,
    schema: &Schema,
    dialect: Dialect,
) -> Result<String, DdlError> {
    let mut body = String::new();
    for col_id in &table.col_order {
        let col = table
            .column(col_id)
            .ok_or_else(|| DdlError::UnresolvedColumn {
                table: table.id.clone(),
                column: col_id.clone(),
            })?;
        body.push_str(&format!("\t{},\n", render_column(col, dialect)));
    }

    for check in &table.check_constraints {
        if check.name.is_empty() {
            body.push_str(&format!("\tCHECK ({}),\n", check.expr));
        } else {
            body.push_str(&format!(
                "\tCONSTRAINT {} CHECK ({}),\n",
                dialect.quote(&check.name),
                check.expr
            ));
        }
    }

    let pk = render_key_list(&table.primary_key, table, dialect)?;
    let parent = interleave_parent(table, schema);

    let mut stmt = match dialect.pk_placement() {
        PkPlacement::Trailing => {
            let mut stmt = format!("CREATE TABLE {} (\n{})", dialect.quote(&table.name), body);
            if !pk.is_empty() {
                stmt.push_str(&format!(" PRIMARY KEY ({})", pk));
            }
            if let Some(parent_name) = parent {
                stmt.push_str(&format!(",\nINTERLEAVE IN PARENT {}", parent_name));
            }
            stmt
        }
        PkPlacement::Inline => {
            if !pk.is_empty() {
                body.push_str(&format!("\tPRIMARY KEY ({})\n", pk));
            }
            let mut stmt = format!("CREATE TABLE {} (\n{})", dialect.quote(&table.name), body);
            if dialect == Dialect::Postgres {
                if let Some(parent_name) = parent {
                    stmt.push_str(&format!(" INTERLEAVE IN PARENT {}", parent_name));
                }
            }
            stmt
        }
    };

    stmt.push_str(dialect.terminator());
    Ok(stmt)
}

/// Quoted display name of the interleaving parent, if it resolves.
fn interleave_parent(table: &TableDef, schema: &Schema) -> Option<String> {
    if table.parent_id.is_empty() {
        return None;
    }
    match schema.table(&table.parent_id) {
        Some(parent) => Some(parent.name.clone()),
        None => {
            tracing::warn!(
                table = %table.name,
                parent_id = %table.parent_id,
                "interleaving parent not in schema, rendering as root"
            );
            None
        }
    }
}
