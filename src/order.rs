//! Deterministic table emission order honoring the interleaving hierarchy.

use std::collections::{HashMap, HashSet};

use crate::ddl::DdlError;
use crate::schema::Schema;

/// Order table ids so every resolvable interleaving parent appears strictly
/// before its children.
///
/// Tables are grouped by interleaving depth (root = 0) and groups
/// concatenated in ascending depth order; within a group, ids are
/// lexicographic, so the output is reproducible across runs and machines.
/// A declared parent that does not exist in the schema makes the table a
/// root rather than an error.
pub fn order_tables(schema: &Schema) -> Result<Vec<String>, DdlError> {
    let ids = schema.table_ids();
    let mut depths: HashMap<&str, usize> = HashMap::new();
    for &id in &ids {
        table_depth(schema, id, &mut depths)?;
    }

    let max_depth = depths.values().copied().max().unwrap_or(0);
    let mut ordered = Vec::with_capacity(ids.len());
    for depth in 0..=max_depth {
        for &id in &ids {
            if depths.get(id).copied() == Some(depth) {
                ordered.push(id.to_string());
            }
        }
    }
    Ok(ordered)
}

/// Interleaving depth of one table, memoized across the call.
///
/// The walk carries its own visited set so a cyclic parent chain terminates
/// with an error instead of looping.
fn table_depth<'a>(
    schema: &'a Schema,
    id: &'a str,
    depths: &mut HashMap<&'a str, usize>,
) -> Result<usize, DdlError> {
    if let Some(&depth) = depths.get(id) {
        return Ok(depth);
    }

    let mut chain: Vec<&str> = Vec::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut current = id;
    let base = loop {
        if let Some(&depth) = depths.get(current) {
            // Memoized ancestor: everything below it hangs off depth + 1.
            break depth + 1;
        }
        if !visited.insert(current) {
            return Err(DdlError::CyclicInterleaving {
                id: current.to_string(),
            });
        }
        chain.push(current);
        let parent = schema
            .table(current)
            .map(|t| t.parent_id.as_str())
            .unwrap_or("");
        if parent.is_empty() || schema.table(parent).is_none() {
            // Root, or a parent the schema does not know about.
            break 0;
        }
        current = parent;
    };

    let mut depth = base;
    for table_id in chain.into_iter().rev() {
        depths.insert(table_id, depth);
        depth += 1;
    }
    Ok(depths[id])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::TableDef;

    fn schema_with_parents(tables: &[(&str, &str)]) -> Schema {
        let mut schema = Schema::default();
        for (id, parent) in tables {
            schema.tables.insert(
                id.to_string(),
                TableDef {
                    name: id.to_string(),
                    id: id.to_string(),
                    parent_id: parent.to_string(),
                    ..Default::default()
                },
            );
        }
        schema
    }

    #[test]
    fn test_chain_order() {
        let schema = schema_with_parents(&[("t3", "t2"), ("t1", ""), ("t2", "t1")]);
        let order = order_tables(&schema).unwrap();
        assert_eq!(order, vec!["t1", "t2", "t3"]);
    }

    #[test]
    fn test_missing_parent_is_root() {
        let schema = schema_with_parents(&[("t1", "ghost"), ("t2", "t1")]);
        let order = order_tables(&schema).unwrap();
        assert_eq!(order, vec!["t1", "t2"]);
    }

    #[test]
    fn test_empty_schema() {
        let order = order_tables(&Schema::default()).unwrap();
        assert!(order.is_empty());
    }

    #[test]
    fn test_siblings_lexicographic() {
        let schema = schema_with_parents(&[("b", ""), ("a", ""), ("c", "a"), ("d", "a")]);
        let order = order_tables(&schema).unwrap();
        assert_eq!(order, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_cycle_detected() {
        let schema = schema_with_parents(&[("a", "b"), ("b", "a")]);
        let err = order_tables(&schema).unwrap_err();
        assert!(matches!(err, DdlError::CyclicInterleaving { .. }));
    }

    #[test]
    fn test_self_cycle_detected() {
        let schema = schema_with_parents(&[("a", "a")]);
        assert!(order_tables(&schema).is_err());
    }
}
