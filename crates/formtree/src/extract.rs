// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Element extraction.
//!
//! Walks a container and produces one flat [`ElementRecord`] per recognized
//! element. Extraction is read-only; records are owned by the caller and
//! live for a single build pass.
//!
//! Ordering is kind-major: all elements of the first recognized kind in
//! document order, then all of the second kind, and so on. This is *not*
//! strict document order across kinds — the grouped builder's tie-breaks
//! depend on it.

use crate::dom::{Document, NodeId};

/// Default recognized element kinds.
pub const DEFAULT_KINDS: &[&str] = &["input", "select", "textarea"];

/// A flat snapshot of one form element's submission-relevant state.
///
/// Produced fresh per extraction pass and discarded once a tree is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementRecord {
    /// The element's `name` attribute, if declared.
    pub name: Option<String>,
    /// The element's value (empty string when undeclared).
    pub value: String,
    /// Grouping key or colon path, from the group attribute.
    pub group: Option<String>,
    /// Parent-group key, from the pargroup attribute.
    pub pargroup: Option<String>,
}

/// Options controlling which elements and attributes are read.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Element kinds (tag names) to recognize, in priority order.
    pub kinds: Vec<String>,
    /// Attribute holding the grouping key / colon path.
    pub group_attr: String,
    /// Attribute holding the parent-group key.
    pub pargroup_attr: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            kinds: DEFAULT_KINDS.iter().map(|k| k.to_string()).collect(),
            group_attr: "group".to_string(),
            pargroup_attr: "pargroup".to_string(),
        }
    }
}

/// Extracts records for every recognized element under `container`.
///
/// Missing attributes yield `None` in the record, never an error.
pub fn extract(doc: &Document, container: NodeId, options: &ExtractOptions) -> Vec<ElementRecord> {
    let descendants = doc.descendants(container);
    let mut records = Vec::new();

    for kind in &options.kinds {
        for &node in &descendants {
            if doc.tag(node) != kind.as_str() {
                continue;
            }
            records.push(ElementRecord {
                name: doc.attr(node, "name").map(|s| s.to_string()),
                value: doc.value(node).to_string(),
                group: doc.attr(node, &options.group_attr).map(|s| s.to_string()),
                pargroup: doc
                    .attr(node, &options.pargroup_attr)
                    .map(|s| s.to_string()),
            });
        }
    }

    records
}

/// As [`extract`], but also returns the matched node ids alongside records.
///
/// Used by operations that need to write back to the elements (e.g. value
/// clearing) or inspect element kinds after the fact.
pub fn extract_nodes(
    doc: &Document,
    container: NodeId,
    options: &ExtractOptions,
) -> Vec<(NodeId, ElementRecord)> {
    let descendants = doc.descendants(container);
    let mut out = Vec::new();

    for kind in &options.kinds {
        for &node in &descendants {
            if doc.tag(node) != kind.as_str() {
                continue;
            }
            out.push((
                node,
                ElementRecord {
                    name: doc.attr(node, "name").map(|s| s.to_string()),
                    value: doc.value(node).to_string(),
                    group: doc.attr(node, &options.group_attr).map(|s| s.to_string()),
                    pargroup: doc
                        .attr(node, &options.pargroup_attr)
                        .map(|s| s.to_string()),
                },
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(doc: &mut Document, parent: NodeId, name: &str, value: &str) -> NodeId {
        let n = doc.append(parent, "input");
        doc.set_attr(n, "name", name);
        doc.set_value(n, value);
        n
    }

    #[test]
    fn test_extract_reads_name_and_value() {
        let mut doc = Document::new();
        let form = doc.append(doc.root(), "form");
        input(&mut doc, form, "email", "what@evv.err");

        let records = extract(&doc, form, &ExtractOptions::default());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name.as_deref(), Some("email"));
        assert_eq!(records[0].value, "what@evv.err");
        assert_eq!(records[0].group, None);
        assert_eq!(records[0].pargroup, None);
    }

    #[test]
    fn test_kind_major_ordering() {
        let mut doc = Document::new();
        let form = doc.append(doc.root(), "form");
        // Document order: select, input, textarea. Kind order puts the
        // input first and the textarea last.
        let sel = doc.append(form, "select");
        doc.set_attr(sel, "name", "country");
        input(&mut doc, form, "email", "e");
        let ta = doc.append(form, "textarea");
        doc.set_attr(ta, "name", "bio");

        let records = extract(&doc, form, &ExtractOptions::default());
        let names: Vec<&str> = records.iter().filter_map(|r| r.name.as_deref()).collect();
        assert_eq!(names, vec!["email", "country", "bio"]);
    }

    #[test]
    fn test_unrecognized_kinds_skipped() {
        let mut doc = Document::new();
        let form = doc.append(doc.root(), "form");
        doc.append(form, "div");
        let button = doc.append(form, "button");
        doc.set_attr(button, "name", "go");
        input(&mut doc, form, "email", "e");

        let records = extract(&doc, form, &ExtractOptions::default());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name.as_deref(), Some("email"));
    }

    #[test]
    fn test_group_attrs_read_by_configured_name() {
        let mut doc = Document::new();
        let form = doc.append(doc.root(), "form");
        let n = input(&mut doc, form, "email", "e");
        doc.set_attr(n, "data-group", "login");

        let mut options = ExtractOptions::default();
        options.group_attr = "data-group".to_string();
        let records = extract(&doc, form, &options);
        assert_eq!(records[0].group.as_deref(), Some("login"));
    }

    #[test]
    fn test_nameless_elements_still_extracted() {
        let mut doc = Document::new();
        let form = doc.append(doc.root(), "form");
        let n = doc.append(form, "input");
        doc.set_value(n, "Make it so");

        let records = extract(&doc, form, &ExtractOptions::default());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, None);
        assert_eq!(records[0].value, "Make it so");
    }
}
