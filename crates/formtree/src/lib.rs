// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

// Warn on missing documentation for public items
#![warn(missing_docs)]

//! # formtree
//!
//! Collects values from form-like markup into a nested keyed value tree
//! and submits it through an injected transport.
//!
//! formtree is platform-agnostic: hosts describe their markup through a
//! small arena [`Document`](dom::Document), inject a [`Transport`]
//! implementation for the actual requests, and register named callbacks,
//! triggers and payload transforms in a [`Registry`]. The engine does the
//! rest — element extraction, grouping (colon paths or group/pargroup
//! fixpoint gathering), wrapping under the form's name, serialization and
//! response dispatch.
//!
//! ## Quick Start
//!
//! ```rust
//! use formtree::{Document, FormEngine, MemoryTransport};
//!
//! let mut doc = Document::new();
//! let form = doc.append(doc.root(), "form");
//! doc.set_attr(form, "name", "new-user");
//! doc.set_attr(form, "action", "/users");
//! doc.set_attr(form, "method", "post");
//! let email = doc.append(form, "input");
//! doc.set_attr(email, "name", "email");
//! doc.set_attr(email, "value", "what@evv.err");
//!
//! let mut engine = FormEngine::new(MemoryTransport::new());
//! let receipt = engine.submit(&doc, form)?;
//! assert_eq!(receipt.payload, r#"{"new-user":{"email":"what@evv.err"}}"#);
//! # Ok::<(), formtree::FormError>(())
//! ```

/// Minimal document model for form extraction.
pub mod dom;
/// Element extraction into flat records.
pub mod extract;
/// Value-tree builders (colon-path and grouped strategies).
pub mod tree;
/// Form resolution by ancestor walking.
pub mod resolver;
/// Named callback/trigger/transform registry.
pub mod registry;
/// Payload transforms (json, urlencoded).
pub mod transform;
/// Injected transport capability.
pub mod transport;
/// Output sink for unhandled responses.
pub mod sink;
/// Engine configuration with one-slot backup.
pub mod config;
/// The form engine: collection, submission, trigger dispatch.
pub mod engine;
/// Error types.
pub mod error;

pub use config::{Config, ConfigPatch, ConfigStore};
pub use dom::{Document, NodeId};
pub use engine::{CallbackResolution, CollectOutcome, FormEngine, SubmitReceipt, TriggerOutcome};
pub use error::{FormError, Result};
pub use extract::{extract, ElementRecord, ExtractOptions};
pub use registry::Registry;
pub use resolver::resolve_form;
pub use sink::{MemorySink, OutputSink};
pub use transport::{
    MemoryTransport, Transport, TransportCallback, TransportReply, TransportRequest, Verb,
};
pub use tree::{colon_path_tree, grouped_tree, wrap, GroupedBuild, GroupingStrategy, Orphan};
