//! Column definition fragments.

use crate::dialect::Dialect;
use crate::schema::{ColumnDef, Type};

/// Render one column definition fragment:
/// `<name> <type>[(mods)][[N]...][ NOT NULL][ <suffix>]`.
///
/// A non-empty auto-generation suffix is itself a DEFAULT clause, so it
/// suppresses the column's explicit default.
pub fn render_column(col: &ColumnDef, dialect: Dialect) -> String {
    let mut fragment = format!("{} {}", dialect.quote(&col.name), render_type(&col.typ, dialect));

    if col.not_null {
        fragment.push_str(" NOT NULL");
    }

    let auto_gen = col
        .auto_gen
        .as_ref()
        .map(|a| dialect.auto_gen_suffix(a))
        .unwrap_or_default();
    if !auto_gen.is_empty() {
        fragment.push_str(&auto_gen);
    } else if let Some(expr) = &col.default_value {
        fragment.push_str(&dialect.default_clause(expr));
    }

    fragment
}

fn render_type(typ: &Type, dialect: Dialect) -> String {
    let mut rendered = dialect.type_name(typ);
    if !typ.mods.is_empty() {
        let mods: Vec<String> = typ.mods.iter().map(|m| m.to_string()).collect();
        rendered.push('(');
        rendered.push_str(&mods.join(","));
        rendered.push(')');
    }
    for bound in &typ.array_bounds {
        rendered.push_str(&format!("[{}]", bound));
    }
    rendered
}
