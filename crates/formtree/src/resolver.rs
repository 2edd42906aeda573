// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Form resolution.
//!
//! Events originate on arbitrary elements; operations act on the enclosing
//! form-like container. [`resolve_form`] finds it by walking the ancestor
//! chain. A miss returns `None` — "no actionable container" — rather than
//! failing.

use crate::dom::{Document, NodeId};

/// Tag recognized as a form container by default.
pub const FORM_TAG: &str = "form";

/// Finds the nearest enclosing form, starting at `node` itself.
///
/// Walks up to the document root; returns `None` when no node on the
/// chain matches the form tag.
pub fn resolve_form(doc: &Document, node: NodeId) -> Option<NodeId> {
    resolve_container(doc, node, |tag| tag == FORM_TAG)
}

/// As [`resolve_form`], with a caller-supplied tag predicate.
pub fn resolve_container(
    doc: &Document,
    node: NodeId,
    predicate: impl Fn(&str) -> bool,
) -> Option<NodeId> {
    let found = doc.ancestors(node).find(|&n| predicate(doc.tag(n)));
    if found.is_none() {
        tracing::debug!(origin = doc.describe(node), "no enclosing form container");
    }
    found
}
