// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Payload transforms.
//!
//! A transform turns the wrapped value tree into the string payload handed
//! to the transport. Transforms are pluggable — the engine assumes nothing
//! about the output format and just looks the configured id up in the
//! registry. Two built-ins ship with [`Registry::with_defaults`]:
//! `json` and `urlencoded`.
//!
//! [`Registry::with_defaults`]: crate::registry::Registry::with_defaults

use serde_json::Value;
use std::rc::Rc;

/// A payload transform: wrapped tree in, request payload out.
pub type PayloadTransform = Rc<dyn Fn(&Value) -> String>;

/// Serializes the tree as compact JSON.
pub fn json(value: &Value) -> String {
    value.to_string()
}

/// Serializes the tree as `application/x-www-form-urlencoded` pairs.
///
/// Top-level string entries are encoded verbatim; nested structures are
/// flattened to compact JSON strings. A non-object tree falls back to its
/// JSON text.
pub fn urlencoded(value: &Value) -> String {
    match value {
        Value::Object(map) => {
            let mut serializer = form_urlencoded::Serializer::new(String::new());
            for (key, entry) in map {
                match entry {
                    Value::String(s) => serializer.append_pair(key, s),
                    other => serializer.append_pair(key, &other.to_string()),
                };
            }
            serializer.finish()
        }
        other => other.to_string(),
    }
}
