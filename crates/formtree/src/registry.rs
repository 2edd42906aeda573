// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Function registry.
//!
//! Markup refers to functions by name: a form's `onreturn` attribute names
//! a response callback, its `action` attribute can name a trigger, and the
//! config names a payload transform. Instead of resolving those names in a
//! global namespace at call time, hosts populate this registry at startup
//! and the engine looks names up in it; an unknown name is a typed
//! not-found (`None`), never a failure.
//!
//! # Example
//!
//! ```rust
//! use formtree::registry::Registry;
//!
//! let mut registry = Registry::with_defaults();
//! registry.register_callback("greet", |reply| {
//!     println!("server said: {}", reply.body());
//! });
//! assert!(registry.callback("greet").is_some());
//! assert!(registry.callback("missing").is_none());
//! ```

use crate::dom::{Document, NodeId};
use crate::transform::{self, PayloadTransform};
use crate::transport::TransportReply;
use std::collections::HashMap;
use std::rc::Rc;

/// A response callback, invoked with whatever the transport reported.
pub type ResponseCallback = Rc<dyn Fn(&TransportReply)>;

/// A trigger function, invoked with the document and the resolved form.
pub type TriggerFn = Rc<dyn Fn(&Document, NodeId)>;

/// Named functions the engine can resolve from markup attributes.
#[derive(Default)]
pub struct Registry {
    callbacks: HashMap<String, ResponseCallback>,
    triggers: HashMap<String, TriggerFn>,
    transforms: HashMap<String, PayloadTransform>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the built-in `json` and `urlencoded`
    /// payload transforms registered.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_transform("json", transform::json);
        registry.register_transform("urlencoded", transform::urlencoded);
        registry
    }

    /// Registers a response callback under `name`, replacing any previous.
    pub fn register_callback(
        &mut self,
        name: impl Into<String>,
        callback: impl Fn(&TransportReply) + 'static,
    ) {
        self.callbacks.insert(name.into(), Rc::new(callback));
    }

    /// Looks up a response callback.
    pub fn callback(&self, name: &str) -> Option<ResponseCallback> {
        self.callbacks.get(name).cloned()
    }

    /// Registers a trigger function under `name`, replacing any previous.
    pub fn register_trigger(
        &mut self,
        name: impl Into<String>,
        trigger: impl Fn(&Document, NodeId) + 'static,
    ) {
        self.triggers.insert(name.into(), Rc::new(trigger));
    }

    /// Looks up a trigger function.
    pub fn trigger(&self, name: &str) -> Option<TriggerFn> {
        self.triggers.get(name).cloned()
    }

    /// Registers a payload transform under `name`, replacing any previous.
    pub fn register_transform(
        &mut self,
        name: impl Into<String>,
        transform: impl Fn(&serde_json::Value) -> String + 'static,
    ) {
        self.transforms.insert(name.into(), Rc::new(transform));
    }

    /// Looks up a payload transform.
    pub fn transform(&self, name: &str) -> Option<PayloadTransform> {
        self.transforms.get(name).cloned()
    }
}
