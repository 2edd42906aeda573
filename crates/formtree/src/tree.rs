// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Value-tree builders.
//!
//! Turns a flat sequence of [`ElementRecord`]s into a nested keyed
//! structure (`serde_json::Value::Object`). Two interchangeable strategies
//! exist, selected by [`GroupingStrategy`]:
//!
//! - **Colon path** ([`colon_path_tree`]): a single `group` attribute holds
//!   a `:`-delimited path defining the nesting directly.
//!   `group="a:b" name="x" value="v"` yields `{"a":{"b":{"x":"v"}}}`.
//! - **Grouped** ([`grouped_tree`]): `group` collects sibling fields under
//!   one key, `pargroup` nests a group under a named parent key resolved by
//!   repeated passes over the remaining records. Records whose pargroup
//!   never materializes are *orphans*: excluded from the result and
//!   reported, one diagnostic per record. That data loss is documented
//!   original behavior, kept as-is.
//!
//! Both builders own their accumulator for the duration of one call; no
//! state is shared across builds, so building twice from the same records
//! yields structurally equal trees.

use crate::extract::ElementRecord;
use serde_json::map::Entry;
use serde_json::{Map, Value};
use serde::{Deserialize, Serialize};

/// Which value-tree builder a collection pass uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupingStrategy {
    /// Colon-delimited single-attribute grouping (`group="a:b"`).
    ColonPath,
    /// Two-attribute group/pargroup fixpoint gathering.
    Grouped,
}

/// A record whose `pargroup` never resolved to a key in the tree.
///
/// The record's value is absent from the built tree; this diagnostic is
/// the only trace of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Orphan {
    /// The record's name, if it had one.
    pub name: Option<String>,
    /// The record's group key, if it had one.
    pub group: Option<String>,
    /// The parent-group key that never materialized.
    pub pargroup: String,
}

/// Result of a grouped (fixpoint) build: the tree plus orphan diagnostics.
#[derive(Debug, Clone)]
pub struct GroupedBuild {
    /// The built value tree.
    pub tree: Value,
    /// One entry per record excluded because its pargroup never resolved.
    pub orphans: Vec<Orphan>,
}

/// Builds a tree by colon-path grouping (Strategy A).
///
/// Records are processed in input order; later leaves win on key collision
/// at the same path. A record without a `group` writes its value directly
/// under its name at the root. Records without a name are skipped — they
/// have no key to write under. Empty path segments become literal `""`
/// keys; there is no error path.
pub fn colon_path_tree(records: &[ElementRecord]) -> Value {
    let mut acc = Map::new();

    for record in records {
        let Some(name) = record.name.as_deref() else {
            continue;
        };
        match record.group.as_deref() {
            None => {
                acc.insert(name.to_string(), Value::String(record.value.clone()));
            }
            Some(path) => {
                // Wrap {name: value} by each segment, innermost first.
                let mut fragment = Map::new();
                fragment.insert(name.to_string(), Value::String(record.value.clone()));
                for segment in path.split(':').rev() {
                    let mut outer = Map::new();
                    outer.insert(segment.to_string(), Value::Object(fragment));
                    fragment = outer;
                }
                deep_merge(&mut acc, fragment);
            }
        }
    }

    Value::Object(acc)
}

/// Deep-merges `incoming` into `acc`.
///
/// Structures merge recursively; when either side of a collision is a
/// leaf, the incoming value replaces the existing one wholesale. The
/// accumulator is owned by the caller's frame — nothing is shared across
/// recursion levels.
fn deep_merge(acc: &mut Map<String, Value>, incoming: Map<String, Value>) {
    for (key, incoming_value) in incoming {
        match acc.entry(key) {
            Entry::Occupied(mut slot) => match (slot.get_mut(), incoming_value) {
                (Value::Object(existing), Value::Object(new)) => deep_merge(existing, new),
                (existing, other) => *existing = other,
            },
            Entry::Vacant(slot) => {
                slot.insert(incoming_value);
            }
        }
    }
}

/// Builds a tree by group/pargroup fixpoint gathering (Strategy B).
///
/// Pass 1 inserts every record with no `pargroup`: grouped records into a
/// created-or-reused object at their group key, the rest at the root.
/// Subsequent passes scan the whole tree (pre-order, insertion order) for
/// an object owning a key equal to each remaining record's `pargroup` and
/// insert `…[pargroup][group][name] = value` when found. Passes repeat
/// until one consumes nothing. Leftover records become [`Orphan`]s.
///
/// Resolution is order-dependent: a pargroup that only materializes later
/// in the same pass is picked up on the *next* pass, and two records
/// racing for the same not-yet-existing subgroup resolve in record order.
/// That matches the original behavior and is deliberately not "fixed".
pub fn grouped_tree(records: &[ElementRecord]) -> GroupedBuild {
    let mut tree = Map::new();
    let mut pending: Vec<&ElementRecord> = Vec::new();

    // Pass 1: everything without a pargroup.
    for record in records {
        let Some(name) = record.name.as_deref() else {
            continue;
        };
        if record.pargroup.is_some() {
            pending.push(record);
            continue;
        }
        match record.group.as_deref() {
            Some(group) => {
                group_slot(&mut tree, group)
                    .insert(name.to_string(), Value::String(record.value.clone()));
            }
            None => {
                tree.insert(name.to_string(), Value::String(record.value.clone()));
            }
        }
    }

    // Repeat passes until a full pass consumes zero records.
    while !pending.is_empty() {
        let mut remaining = Vec::with_capacity(pending.len());
        let mut consumed = 0usize;

        for record in pending {
            if insert_under_pargroup(&mut tree, record) {
                consumed += 1;
            } else {
                remaining.push(record);
            }
        }

        pending = remaining;
        if consumed == 0 {
            break;
        }
    }

    let orphans: Vec<Orphan> = pending
        .into_iter()
        .filter_map(|record| {
            let pargroup = record.pargroup.clone()?;
            tracing::warn!(
                name = record.name.as_deref().unwrap_or(""),
                pargroup = pargroup.as_str(),
                "orphaned group reference: parent group never materialized, value dropped"
            );
            Some(Orphan {
                name: record.name.clone(),
                group: record.group.clone(),
                pargroup,
            })
        })
        .collect();

    GroupedBuild {
        tree: Value::Object(tree),
        orphans,
    }
}

/// Wraps a built tree under `key`, or returns it unchanged without one.
pub fn wrap(tree: Value, key: Option<&str>) -> Value {
    match key {
        Some(key) => {
            let mut outer = Map::new();
            outer.insert(key.to_string(), tree);
            Value::Object(outer)
        }
        None => tree,
    }
}

/// Creates-or-reuses an object at `map[group]` and returns it.
///
/// Reuse only happens when the existing value is already an object; a leaf
/// in the way gets replaced by a fresh object.
fn group_slot<'a>(map: &'a mut Map<String, Value>, group: &str) -> &'a mut Map<String, Value> {
    if !matches!(map.get(group), Some(Value::Object(_))) {
        map.insert(group.to_string(), Value::Object(Map::new()));
    }
    match map.get_mut(group) {
        Some(Value::Object(slot)) => slot,
        // Just inserted above; the tree only holds objects and strings.
        _ => unreachable!("group slot was just materialized as an object"),
    }
}

/// Tries to place one pargroup-bearing record into the tree.
///
/// Returns false when the pargroup key does not yet exist anywhere.
fn insert_under_pargroup(tree: &mut Map<String, Value>, record: &ElementRecord) -> bool {
    let (Some(name), Some(pargroup)) = (record.name.as_deref(), record.pargroup.as_deref()) else {
        // No name to write under: consume silently, same as pass 1.
        return true;
    };

    let Some(owner_path) = find_owner_path(tree, pargroup) else {
        return false;
    };
    let Some(owner) = descend_mut(tree, &owner_path) else {
        return false;
    };

    let parent = group_slot(owner, pargroup);
    let target = match record.group.as_deref() {
        Some(group) => group_slot(parent, group),
        None => parent,
    };
    target.insert(name.to_string(), Value::String(record.value.clone()));
    true
}

/// Finds the object owning `key`, anywhere in the tree.
///
/// Returns the key path from the root to that object (empty when the root
/// itself owns it), searching pre-order in insertion order.
fn find_owner_path(map: &Map<String, Value>, key: &str) -> Option<Vec<String>> {
    if map.contains_key(key) {
        return Some(Vec::new());
    }
    for (child_key, child) in map {
        if let Value::Object(child_map) = child {
            if let Some(mut path) = find_owner_path(child_map, key) {
                path.insert(0, child_key.clone());
                return Some(path);
            }
        }
    }
    None
}

/// Follows a key path of objects down from `map`.
fn descend_mut<'a>(
    mut map: &'a mut Map<String, Value>,
    path: &[String],
) -> Option<&'a mut Map<String, Value>> {
    for key in path {
        match map.get_mut(key) {
            Some(Value::Object(child)) => map = child,
            _ => return None,
        }
    }
    Some(map)
}
