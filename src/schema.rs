use std::collections::HashMap;

/// Abstract relational schema, keyed by table id.
///
/// Ids are stable identifiers distinct from display names: names may change
/// under renaming rules, ids never do. The map itself has no meaningful
/// iteration order; every consumer must order explicitly.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Schema {
    pub tables: HashMap<String, TableDef>,
}

impl Schema {
    pub fn table(&self, id: &str) -> Option<&TableDef> {
        self.tables.get(id)
    }

    /// Table ids in lexicographic order.
    pub fn table_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.tables.keys().map(|id| id.as_str()).collect();
        ids.sort_unstable();
        ids
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TableDef {
    pub name: String,
    pub id: String,
    /// Column declaration order. Rendering follows this, never the map.
    pub col_order: Vec<String>,
    pub columns: HashMap<String, ColumnDef>,
    pub primary_key: Vec<KeyPart>,
    pub foreign_keys: Vec<ForeignKeyDef>,
    pub indexes: Vec<IndexDef>,
    pub check_constraints: Vec<CheckConstraintDef>,
    /// Id of the interleaving parent; empty for root tables.
    pub parent_id: String,
}

impl TableDef {
    pub fn column(&self, col_id: &str) -> Option<&ColumnDef> {
        self.columns.get(col_id)
    }

    pub fn column_name(&self, col_id: &str) -> Option<&str> {
        self.columns.get(col_id).map(|c| c.name.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ColumnDef {
    pub name: String,
    pub id: String,
    pub typ: Type,
    pub not_null: bool,
    pub auto_gen: Option<AutoGen>,
    pub default_value: Option<String>,
}

/// Semantic type name plus modifiers (length, precision) and array bounds.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Type {
    pub name: String,
    pub mods: Vec<i64>,
    pub array_bounds: Vec<i64>,
}

impl Type {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            mods: vec![],
            array_bounds: vec![],
        }
    }
}

/// One column reference within a primary key or index key.
///
/// `order` is the explicit 1-based position; key lists render sorted by it,
/// ascending ties broken by sequence position.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct KeyPart {
    pub col_id: String,
    pub desc: bool,
    pub order: i64,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ForeignKeyDef {
    /// Constraint name; empty for an unnamed constraint.
    pub name: String,
    pub col_ids: Vec<String>,
    pub refer_table_id: String,
    pub refer_col_ids: Vec<String>,
    pub on_delete: Option<String>,
    pub on_update: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IndexDef {
    pub name: String,
    pub table_id: String,
    pub unique: bool,
    pub keys: Vec<KeyPart>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CheckConstraintDef {
    /// Constraint name; empty renders a bare CHECK clause.
    pub name: String,
    pub expr: String,
}

/// Database-generated column value rule.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AutoGen {
    pub name: String,
    pub kind: GenerationKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum GenerationKind {
    #[default]
    None,
    /// Pre-defined expression, e.g. UUID generation.
    Uuid,
    /// Backed by a named sequence.
    Sequence,
    AutoIncrement,
}
