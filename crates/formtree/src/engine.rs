// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! The form engine: collection, submission and trigger dispatch.
//!
//! [`FormEngine`] ties the pieces together. It owns the configuration
//! store, the function registry, the injected transport and an optional
//! output sink, and exposes the three public entry points: [`collect`],
//! [`submit`] and [`trigger`] (plus the autosubmit and value-clearing
//! helpers built on them). Each entry point runs to completion as one
//! reaction to an external event; the only suspension point is the
//! transport's asynchronous callback.
//!
//! [`collect`]: FormEngine::collect
//! [`submit`]: FormEngine::submit
//! [`trigger`]: FormEngine::trigger
//!
//! # Example
//!
//! ```rust
//! use formtree::dom::Document;
//! use formtree::engine::FormEngine;
//! use formtree::transport::MemoryTransport;
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
//! let receipt = engine.submit(&doc, form).unwrap();
//! assert_eq!(receipt.url, "/users");
//! assert_eq!(receipt.payload, r#"{"new-user":{"email":"what@evv.err"}}"#);
//! ```

use crate::config::{Config, ConfigPatch, ConfigStore};
use crate::dom::{Document, NodeId};
use crate::error::{FormError, Result};
use crate::extract::{extract_nodes, ElementRecord, ExtractOptions};
use crate::registry::Registry;
use crate::resolver::resolve_form;
use crate::sink::OutputSink;
use crate::transport::{Transport, TransportCallback, TransportRequest, Verb};
use crate::tree::{colon_path_tree, grouped_tree, wrap, GroupingStrategy, Orphan};
use serde_json::Value;
use std::rc::Rc;
use std::str::FromStr;

/// Result of a collection pass: the wrapped tree plus any orphans.
#[derive(Debug, Clone)]
pub struct CollectOutcome {
    /// The wrapped value tree.
    pub value: Value,
    /// Orphan diagnostics from a grouped build (empty for colon-path).
    pub orphans: Vec<Orphan>,
}

/// How the response callback for a submission resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackResolution {
    /// A registered callback named by the form's callback attribute.
    Named(String),
    /// The output sink, routed to the form's terminal region.
    Terminal(String),
    /// The output sink's default region.
    DefaultSink,
    /// Nothing handles the response; it is dropped on arrival.
    None,
}

/// What a submission dispatched, for introspection and tests.
#[derive(Debug, Clone)]
pub struct SubmitReceipt {
    /// Destination URL from the trigger attribute.
    pub url: String,
    /// Verb parsed from the method attribute.
    pub verb: Verb,
    /// The serialized payload handed to the transport.
    pub payload: String,
    /// Orphan diagnostics from the build.
    pub orphans: Vec<Orphan>,
    /// How the response callback resolved.
    pub callback: CallbackResolution,
    /// A configured transform id that was not registered, if any.
    /// The payload degraded to plain JSON in that case.
    pub missing_transform: Option<String>,
}

/// Outcome of a trigger dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// No enclosing form; nothing happened.
    NoForm,
    /// A registered trigger ran against the form.
    Invoked {
        /// The resolved form.
        form: NodeId,
        /// The trigger's registered name.
        name: String,
    },
    /// The form's trigger attribute named nothing registered.
    Unresolved {
        /// The resolved form.
        form: NodeId,
        /// The attribute value, when present.
        name: Option<String>,
    },
}

/// Central engine for form collection and submission.
///
/// Operations take `&mut self`; one engine serializes its own config and
/// last-form writes by construction. Nothing limits how many submissions
/// are in flight at the transport — each dispatch carries its own
/// callback and no completion ordering is assumed.
pub struct FormEngine<T: Transport> {
    config: ConfigStore,
    registry: Registry,
    transport: T,
    sink: Option<Rc<dyn OutputSink>>,
    extract: ExtractOptions,
    last_form: Option<NodeId>,
}

impl<T: Transport> FormEngine<T> {
    /// Creates an engine with default config, default registry (built-in
    /// transforms only) and no output sink.
    pub fn new(transport: T) -> Self {
        Self {
            config: ConfigStore::default(),
            registry: Registry::with_defaults(),
            transport,
            sink: None,
            extract: ExtractOptions::default(),
            last_form: None,
        }
    }

    /// Attaches an output sink for responses no callback handles.
    pub fn with_sink(mut self, sink: Rc<dyn OutputSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Overrides which elements and grouping attributes extraction reads.
    pub fn with_extract_options(mut self, options: ExtractOptions) -> Self {
        self.extract = options;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &Config {
        self.config.active()
    }

    /// Applies a config patch; see [`ConfigStore::apply`].
    pub fn apply_config(&mut self, patch: ConfigPatch) -> &Config {
        self.config.apply(patch)
    }

    /// Restores the previous config; see [`ConfigStore::reset`].
    pub fn reset_config(&mut self) -> &Config {
        self.config.reset()
    }

    /// The function registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Mutable access to the function registry, for host registration.
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// The injected transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The most recently submitted or triggered form, if any.
    ///
    /// A relation, not ownership: the node lives in whichever document it
    /// came from.
    pub fn last_form(&self) -> Option<NodeId> {
        self.last_form
    }

    /// Collects the form's values into a wrapped tree.
    ///
    /// Value fields build the tree per the configured strategy and get
    /// wrapped under the form's `name`, else its `id`, else the configured
    /// fallback key (no wrapping when the fallback is disabled).
    /// Submission controls — `button` elements and `input`s typed `submit`
    /// or `button` — land at the root alongside the wrapped key instead of
    /// inside it, matching the documented original behavior.
    pub fn collect(&self, doc: &Document, form: NodeId) -> CollectOutcome {
        let pairs = extract_nodes(doc, form, &self.extract);
        let mut fields: Vec<ElementRecord> = Vec::with_capacity(pairs.len());
        let mut controls: Vec<ElementRecord> = Vec::new();
        for (node, record) in pairs {
            if is_submission_control(doc, node) {
                controls.push(record);
            } else {
                fields.push(record);
            }
        }

        let (tree, orphans) = match self.config.active().strategy {
            GroupingStrategy::ColonPath => (colon_path_tree(&fields), Vec::new()),
            GroupingStrategy::Grouped => {
                let build = grouped_tree(&fields);
                (build.tree, build.orphans)
            }
        };

        let config = self.config.active();
        let key = doc
            .attr(form, "name")
            .or_else(|| doc.attr(form, "id"))
            .or(config.wrap_key.as_deref());
        let mut value = wrap(tree, key);

        if let Value::Object(root) = &mut value {
            for control in controls {
                if let Some(name) = control.name {
                    root.insert(name, Value::String(control.value));
                }
            }
        }

        CollectOutcome { value, orphans }
    }

    /// Submits the form through the transport.
    ///
    /// Requires a destination (trigger attribute) and a verb (method
    /// attribute); either missing aborts with a typed error and no request
    /// is sent. The collected tree is transformed (an unregistered
    /// transform id degrades to plain JSON, noted on the receipt), the
    /// response callback is resolved — named callback, then terminal
    /// region, then default sink region, then none — and the request is
    /// dispatched. Records the form as the engine's last form.
    pub fn submit(&mut self, doc: &Document, form: NodeId) -> Result<SubmitReceipt> {
        let config = self.config.active().clone();

        let url = match doc.attr(form, &config.trigger_attr) {
            Some(url) => url.to_string(),
            None => {
                let err = FormError::MissingAttribute {
                    attribute: config.trigger_attr.clone(),
                    form: doc.describe(form),
                };
                tracing::warn!(%err, "submit aborted");
                return Err(err);
            }
        };
        let verb = match doc.attr(form, &config.method_attr) {
            Some(method) => match Verb::from_str(method) {
                Ok(verb) => verb,
                Err(()) => {
                    let err = FormError::UnknownVerb(method.to_string());
                    tracing::warn!(%err, "submit aborted");
                    return Err(err);
                }
            },
            None => {
                let err = FormError::MissingAttribute {
                    attribute: config.method_attr.clone(),
                    form: doc.describe(form),
                };
                tracing::warn!(%err, "submit aborted");
                return Err(err);
            }
        };

        let collected = self.collect(doc, form);

        let (payload, missing_transform) = match &config.transform {
            Some(id) => match self.registry.transform(id) {
                Some(transform) => (transform(&collected.value), None),
                None => {
                    tracing::warn!(
                        transform = id.as_str(),
                        "configured transform not registered, sending plain JSON"
                    );
                    (collected.value.to_string(), Some(id.clone()))
                }
            },
            None => (serde_json::to_string(&collected.value)?, None),
        };

        let (resolution, callback) = self.resolve_callback(doc, form, &config);

        self.last_form = Some(form);
        tracing::debug!(url = url.as_str(), verb = %verb, "dispatching form submission");
        self.transport.dispatch(
            verb,
            TransportRequest {
                url: url.clone(),
                payload: payload.clone(),
            },
            callback,
        );

        Ok(SubmitReceipt {
            url,
            verb,
            payload,
            orphans: collected.orphans,
            callback: resolution,
            missing_transform,
        })
    }

    /// Resolution order: named callback, terminal sink region, default
    /// sink region, none. An unresolvable name degrades to the next step;
    /// it is never an error.
    fn resolve_callback(
        &self,
        doc: &Document,
        form: NodeId,
        config: &Config,
    ) -> (CallbackResolution, TransportCallback) {
        if let Some(name) = doc.attr(form, &config.callback_attr) {
            if let Some(callback) = self.registry.callback(name) {
                return (
                    CallbackResolution::Named(name.to_string()),
                    Box::new(move |reply| callback(&reply)),
                );
            }
            tracing::debug!(
                callback = name,
                "callback not registered, falling back to output sink"
            );
        }

        if let Some(sink) = &self.sink {
            let sink = sink.clone();
            if let Some(region) = doc.attr(form, &config.terminal_attr) {
                let region = region.to_string();
                return (
                    CallbackResolution::Terminal(region.clone()),
                    Box::new(move |reply| sink.write(Some(&region), reply.body())),
                );
            }
            return (
                CallbackResolution::DefaultSink,
                Box::new(move |reply| sink.write(None, reply.body())),
            );
        }

        (CallbackResolution::None, Box::new(|_| {}))
    }

    /// Dispatches a trigger for the form enclosing `origin`.
    ///
    /// The form's trigger attribute names a registered trigger function,
    /// which is invoked with the document and the form. No enclosing form
    /// is a no-op; an unregistered name is a logged, non-fatal diagnostic.
    pub fn trigger(&mut self, doc: &Document, origin: NodeId) -> TriggerOutcome {
        let Some(form) = resolve_form(doc, origin) else {
            return TriggerOutcome::NoForm;
        };

        let name = doc.attr(form, &self.config.active().trigger_attr);
        let resolved = name.and_then(|n| self.registry.trigger(n).map(|f| (n.to_string(), f)));
        match resolved {
            Some((name, func)) => {
                self.last_form = Some(form);
                func(doc, form);
                TriggerOutcome::Invoked { form, name }
            }
            None => {
                tracing::warn!(
                    form = doc.describe(form),
                    trigger = name.unwrap_or("<absent>"),
                    "trigger not resolvable"
                );
                TriggerOutcome::Unresolved {
                    form,
                    name: name.map(|n| n.to_string()),
                }
            }
        }
    }

    /// Autosubmit: submits the enclosing form after a change on `element`.
    ///
    /// Only fires when the element carries the autosubmit attribute and a
    /// form resolves; returns `None` otherwise.
    pub fn change(&mut self, doc: &Document, element: NodeId) -> Option<Result<SubmitReceipt>> {
        if !doc.has_attr(element, &self.config.active().autosubmit_attr) {
            return None;
        }
        let form = resolve_form(doc, element)?;
        Some(self.submit(doc, form))
    }

    /// Blanks the value of every recognized element in the form.
    ///
    /// Elements carrying the fixed attribute keep their value.
    pub fn clear_form(&self, doc: &mut Document, form: NodeId) {
        let fixed_attr = self.config.active().fixed_attr.clone();
        let nodes: Vec<NodeId> = extract_nodes(doc, form, &self.extract)
            .into_iter()
            .map(|(node, _)| node)
            .collect();
        for node in nodes {
            if !doc.has_attr(node, &fixed_attr) {
                doc.set_value(node, "");
            }
        }
    }
}

/// True for elements that trigger submission rather than carry data.
fn is_submission_control(doc: &Document, node: NodeId) -> bool {
    match doc.tag(node) {
        "button" => true,
        "input" => matches!(doc.attr(node, "type"), Some("submit") | Some("button")),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigPatch;
    use crate::sink::MemorySink;
    use crate::transport::{MemoryTransport, TransportReply};
    use serde_json::json;
    use std::cell::RefCell;

    fn input(doc: &mut Document, parent: NodeId, name: &str, value: &str) -> NodeId {
        let n = doc.append(parent, "input");
        doc.set_attr(n, "name", name);
        doc.set_value(n, value);
        n
    }

    fn submit_form(doc: &mut Document) -> NodeId {
        let form = doc.append(doc.root(), "form");
        doc.set_attr(form, "action", "/users");
        doc.set_attr(form, "method", "post");
        form
    }

    #[test]
    fn test_collect_wraps_under_form_name() {
        let mut doc = Document::new();
        let form = doc.append(doc.root(), "form");
        doc.set_attr(form, "name", "new-user");
        input(&mut doc, form, "email", "what@evv.err");

        let engine = FormEngine::new(MemoryTransport::new());
        let outcome = engine.collect(&doc, form);
        assert_eq!(outcome.value, json!({ "new-user": { "email": "what@evv.err" } }));
    }

    #[test]
    fn test_collect_falls_back_to_id_then_config_key() {
        let mut doc = Document::new();
        let form = doc.append(doc.root(), "form");
        doc.set_attr(form, "id", "signup");
        input(&mut doc, form, "email", "e");

        let mut engine = FormEngine::new(MemoryTransport::new());
        let outcome = engine.collect(&doc, form);
        assert_eq!(outcome.value, json!({ "signup": { "email": "e" } }));

        let mut doc = Document::new();
        let form = doc.append(doc.root(), "form");
        input(&mut doc, form, "email", "e");
        let outcome = engine.collect(&doc, form);
        assert_eq!(outcome.value, json!({ "unnamed": { "email": "e" } }));

        // Disabled fallback: tree stays unwrapped.
        engine.apply_config(ConfigPatch {
            wrap_key: Some(None),
            ..Default::default()
        });
        let outcome = engine.collect(&doc, form);
        assert_eq!(outcome.value, json!({ "email": "e" }));
    }

    #[test]
    fn test_collect_scenario_submit_control_at_root() {
        let mut doc = Document::new();
        let form = doc.append(doc.root(), "form");
        doc.set_attr(form, "name", "new-user");
        input(&mut doc, form, "email", "what@evv.err");
        input(&mut doc, form, "password", "so clever");
        let button = input(&mut doc, form, "submit", "Make it so");
        doc.set_attr(button, "type", "submit");

        let engine = FormEngine::new(MemoryTransport::new());
        let outcome = engine.collect(&doc, form);
        assert_eq!(
            outcome.value,
            json!({
                "new-user": { "email": "what@evv.err", "password": "so clever" },
                "submit": "Make it so"
            })
        );
    }

    #[test]
    fn test_collect_grouped_strategy_carries_orphans() {
        let mut doc = Document::new();
        let form = doc.append(doc.root(), "form");
        doc.set_attr(form, "name", "account");
        let a = input(&mut doc, form, "email", "e");
        doc.set_attr(a, "group", "login");
        let b = input(&mut doc, form, "nickname", "zed");
        doc.set_attr(b, "group", "personal");
        doc.set_attr(b, "pargroup", "x");

        let mut engine = FormEngine::new(MemoryTransport::new());
        engine.apply_config(ConfigPatch {
            strategy: Some(GroupingStrategy::Grouped),
            ..Default::default()
        });
        let outcome = engine.collect(&doc, form);
        assert_eq!(outcome.value, json!({ "account": { "login": { "email": "e" } } }));
        assert_eq!(outcome.orphans.len(), 1);
        assert_eq!(outcome.orphans[0].pargroup, "x");
    }

    #[test]
    fn test_submit_requires_destination_and_verb() {
        let mut doc = Document::new();
        let form = doc.append(doc.root(), "form");
        input(&mut doc, form, "email", "e");

        let mut engine = FormEngine::new(MemoryTransport::new());
        let err = engine.submit(&doc, form).unwrap_err();
        assert!(matches!(err, FormError::MissingAttribute { ref attribute, .. } if attribute == "action"));

        doc.set_attr(form, "action", "/users");
        let err = engine.submit(&doc, form).unwrap_err();
        assert!(matches!(err, FormError::MissingAttribute { ref attribute, .. } if attribute == "method"));

        doc.set_attr(form, "method", "teleport");
        let err = engine.submit(&doc, form).unwrap_err();
        assert!(matches!(err, FormError::UnknownVerb(ref verb) if verb == "teleport"));

        // Nothing reached the transport.
        assert!(engine.transport().sent().is_empty());
        assert_eq!(engine.last_form(), None);
    }

    #[test]
    fn test_submit_dispatches_and_records_last_form() {
        let mut doc = Document::new();
        let form = submit_form(&mut doc);
        doc.set_attr(form, "name", "new-user");
        input(&mut doc, form, "email", "what@evv.err");

        let mut engine = FormEngine::new(MemoryTransport::new());
        let receipt = engine.submit(&doc, form).unwrap();
        assert_eq!(receipt.verb, Verb::Post);
        assert_eq!(receipt.url, "/users");
        assert_eq!(receipt.callback, CallbackResolution::None);

        let sent = engine.transport().sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].1.payload, r#"{"new-user":{"email":"what@evv.err"}}"#);
        assert_eq!(engine.last_form(), Some(form));
    }

    #[test]
    fn test_submit_named_callback_receives_reply() {
        let mut doc = Document::new();
        let form = submit_form(&mut doc);
        doc.set_attr(form, "onreturn", "greet");
        input(&mut doc, form, "email", "e");

        let replies = Rc::new(RefCell::new(Vec::new()));
        let log = replies.clone();
        let mut engine = FormEngine::new(MemoryTransport::replying(TransportReply::Success(
            "welcome".to_string(),
        )));
        engine
            .registry_mut()
            .register_callback("greet", move |reply| log.borrow_mut().push(reply.clone()));

        let receipt = engine.submit(&doc, form).unwrap();
        assert_eq!(receipt.callback, CallbackResolution::Named("greet".to_string()));
        assert_eq!(
            replies.borrow().as_slice(),
            &[TransportReply::Success("welcome".to_string())]
        );
    }

    #[test]
    fn test_submit_unresolvable_callback_degrades_to_sink() {
        let mut doc = Document::new();
        let form = submit_form(&mut doc);
        doc.set_attr(form, "onreturn", "nobody");
        input(&mut doc, form, "email", "e");

        let sink = Rc::new(MemorySink::new());
        let mut engine = FormEngine::new(MemoryTransport::replying(TransportReply::Success(
            "body".to_string(),
        )))
        .with_sink(sink.clone());

        let receipt = engine.submit(&doc, form).unwrap();
        assert_eq!(receipt.callback, CallbackResolution::DefaultSink);
        assert_eq!(sink.writes(), vec![(None, "body".to_string())]);
    }

    #[test]
    fn test_submit_terminal_attribute_routes_sink_region() {
        let mut doc = Document::new();
        let form = submit_form(&mut doc);
        doc.set_attr(form, "terminal", "status-line");
        input(&mut doc, form, "email", "e");

        let sink = Rc::new(MemorySink::new());
        let mut engine = FormEngine::new(MemoryTransport::replying(TransportReply::Success(
            "done".to_string(),
        )))
        .with_sink(sink.clone());

        let receipt = engine.submit(&doc, form).unwrap();
        assert_eq!(
            receipt.callback,
            CallbackResolution::Terminal("status-line".to_string())
        );
        assert_eq!(
            sink.writes(),
            vec![(Some("status-line".to_string()), "done".to_string())]
        );
    }

    #[test]
    fn test_submit_transport_failure_forwarded() {
        let mut doc = Document::new();
        let form = submit_form(&mut doc);
        doc.set_attr(form, "onreturn", "observe");
        input(&mut doc, form, "email", "e");

        let replies = Rc::new(RefCell::new(Vec::new()));
        let log = replies.clone();
        let mut engine = FormEngine::new(MemoryTransport::replying(TransportReply::Failure(
            "gateway timeout".to_string(),
        )));
        engine
            .registry_mut()
            .register_callback("observe", move |reply| log.borrow_mut().push(reply.clone()));

        engine.submit(&doc, form).unwrap();
        assert_eq!(
            replies.borrow().as_slice(),
            &[TransportReply::Failure("gateway timeout".to_string())]
        );
    }

    #[test]
    fn test_submit_missing_transform_degrades_to_json() {
        let mut doc = Document::new();
        let form = submit_form(&mut doc);
        input(&mut doc, form, "email", "e");

        let mut engine = FormEngine::new(MemoryTransport::new());
        engine.apply_config(ConfigPatch {
            transform: Some(Some("msgpack".to_string())),
            ..Default::default()
        });
        let receipt = engine.submit(&doc, form).unwrap();
        assert_eq!(receipt.missing_transform.as_deref(), Some("msgpack"));
        assert_eq!(receipt.payload, r#"{"unnamed":{"email":"e"}}"#);
    }

    #[test]
    fn test_submit_urlencoded_transform() {
        let mut doc = Document::new();
        let form = submit_form(&mut doc);
        input(&mut doc, form, "email", "a@b.c");

        let mut engine = FormEngine::new(MemoryTransport::new());
        engine.apply_config(ConfigPatch {
            transform: Some(Some("urlencoded".to_string())),
            wrap_key: Some(None),
            ..Default::default()
        });
        let receipt = engine.submit(&doc, form).unwrap();
        assert_eq!(receipt.payload, "email=a%40b.c");
        assert_eq!(receipt.missing_transform, None);
    }

    #[test]
    fn test_trigger_invokes_registered_function() {
        let mut doc = Document::new();
        let form = doc.append(doc.root(), "form");
        doc.set_attr(form, "action", "refresh");
        let button = doc.append(form, "input");

        let hits = Rc::new(RefCell::new(Vec::new()));
        let log = hits.clone();
        let mut engine = FormEngine::new(MemoryTransport::new());
        engine
            .registry_mut()
            .register_trigger("refresh", move |doc, form| {
                log.borrow_mut().push(doc.describe(form));
            });

        let outcome = engine.trigger(&doc, button);
        assert_eq!(
            outcome,
            TriggerOutcome::Invoked {
                form,
                name: "refresh".to_string()
            }
        );
        assert_eq!(hits.borrow().as_slice(), &["form".to_string()]);
        assert_eq!(engine.last_form(), Some(form));
        // Trigger path sends nothing through the transport.
        assert!(engine.transport().sent().is_empty());
    }

    #[test]
    fn test_trigger_without_form_is_noop() {
        let mut doc = Document::new();
        let orphan_input = doc.append(doc.root(), "input");
        let mut engine = FormEngine::new(MemoryTransport::new());
        assert_eq!(engine.trigger(&doc, orphan_input), TriggerOutcome::NoForm);
        assert_eq!(engine.last_form(), None);
    }

    #[test]
    fn test_trigger_unresolvable_is_diagnostic_not_error() {
        let mut doc = Document::new();
        let form = doc.append(doc.root(), "form");
        doc.set_attr(form, "action", "missing-fn");
        let input = doc.append(form, "input");

        let mut engine = FormEngine::new(MemoryTransport::new());
        assert_eq!(
            engine.trigger(&doc, input),
            TriggerOutcome::Unresolved {
                form,
                name: Some("missing-fn".to_string())
            }
        );
        assert_eq!(engine.last_form(), None);
    }

    #[test]
    fn test_change_autosubmits_only_marked_elements() {
        let mut doc = Document::new();
        let form = submit_form(&mut doc);
        let plain = input(&mut doc, form, "email", "e");
        let auto = input(&mut doc, form, "country", "CH");
        doc.set_attr(auto, "autosubmit", "");

        let mut engine = FormEngine::new(MemoryTransport::new());
        assert!(engine.change(&doc, plain).is_none());
        let receipt = engine.change(&doc, auto).expect("autosubmit fires");
        assert_eq!(receipt.unwrap().url, "/users");
        assert_eq!(engine.transport().sent().len(), 1);
    }

    #[test]
    fn test_clear_form_honors_fixed_attribute() {
        let mut doc = Document::new();
        let form = doc.append(doc.root(), "form");
        let email = input(&mut doc, form, "email", "keepme@no.pe");
        doc.set_attr(email, "disabled", "");
        let password = input(&mut doc, form, "password", "so clever");

        let engine = FormEngine::new(MemoryTransport::new());
        engine.clear_form(&mut doc, form);
        assert_eq!(doc.value(email), "keepme@no.pe");
        assert_eq!(doc.value(password), "");
    }
}
