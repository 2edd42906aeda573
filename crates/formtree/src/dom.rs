// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Minimal document model for form extraction.
//!
//! formtree never touches a real DOM. Host adapters (browsers, servers,
//! tests) describe their markup through this platform-agnostic arena
//! document, the same way host HTTP stacks describe requests through a
//! plain request struct. A [`Document`] owns every node; a [`NodeId`] is a
//! cheap copyable handle into it.
//!
//! # Example
//!
//! ```rust
//! use formtree::dom::Document;
//!
//! let mut doc = Document::new();
//! let form = doc.append(doc.root(), "form");
//! doc.set_attr(form, "name", "new-user");
//! let input = doc.append(form, "input");
//! doc.set_attr(input, "name", "email");
//! doc.set_attr(input, "value", "what@evv.err");
//!
//! assert_eq!(doc.attr(form, "name"), Some("new-user"));
//! assert_eq!(doc.value(input), "what@evv.err");
//! ```

use std::collections::HashMap;

/// Handle to a node inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct NodeData {
    tag: String,
    attrs: HashMap<String, String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An arena-backed tree of tagged, attributed nodes.
///
/// Created with a synthetic `#document` root; every other node is appended
/// under an existing one. Node handles stay valid for the document's
/// lifetime (nodes are never removed).
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<NodeData>,
}

impl Document {
    /// Creates a document containing only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData {
                tag: "#document".to_string(),
                attrs: HashMap::new(),
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// Returns the synthetic root node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Appends a new child with the given tag under `parent`.
    pub fn append(&mut self, parent: NodeId, tag: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            tag: tag.into(),
            attrs: HashMap::new(),
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Returns the node's tag name.
    pub fn tag(&self, id: NodeId) -> &str {
        &self.nodes[id.0].tag
    }

    /// Returns the node's parent, or `None` for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Sets an attribute on the node, replacing any previous value.
    pub fn set_attr(&mut self, id: NodeId, name: impl Into<String>, value: impl Into<String>) {
        self.nodes[id.0].attrs.insert(name.into(), value.into());
    }

    /// Reads an attribute. Absent attributes are `None`, never an error.
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.nodes[id.0].attrs.get(name).map(|s| s.as_str())
    }

    /// Returns true if the attribute is present, whatever its value.
    pub fn has_attr(&self, id: NodeId, name: &str) -> bool {
        self.nodes[id.0].attrs.contains_key(name)
    }

    /// Reads the node's `value` attribute, empty string when absent.
    pub fn value(&self, id: NodeId) -> &str {
        self.attr(id, "value").unwrap_or("")
    }

    /// Sets the node's `value` attribute.
    pub fn set_value(&mut self, id: NodeId, value: impl Into<String>) {
        self.set_attr(id, "value", value);
    }

    /// All descendants of `id` in pre-order, excluding `id` itself.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.nodes[id.0].children.iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.nodes[next.0].children.iter().rev().copied());
        }
        out
    }

    /// Iterates `id` first, then each ancestor up to the root.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            doc: self,
            next: Some(id),
        }
    }

    /// A short human-readable description of a node for diagnostics.
    ///
    /// Formats as `tag`, `tag[name=..]` or `tag[id=..]`.
    pub fn describe(&self, id: NodeId) -> String {
        let tag = self.tag(id);
        if let Some(name) = self.attr(id, "name") {
            format!("{}[name={}]", tag, name)
        } else if let Some(dom_id) = self.attr(id, "id") {
            format!("{}[id={}]", tag, dom_id)
        } else {
            tag.to_string()
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a node and its ancestors, nearest first.
pub struct Ancestors<'a> {
    doc: &'a Document,
    next: Option<NodeId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.doc.parent(current);
        Some(current)
    }
}
