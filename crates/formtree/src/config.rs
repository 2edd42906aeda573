// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Engine configuration.
//!
//! A [`Config`] names the markup attributes the engine reads and the
//! defaults for wrapping and serialization. The [`ConfigStore`] holds the
//! active config plus a single backup snapshot: applying a patch saves the
//! previous config (overwriting any earlier backup), and [`ConfigStore::reset`]
//! restores it once.
//!
//! Patches are sieved: a [`ConfigPatch`] only has fields for recognized
//! options, and deserializing one from JSON silently drops unknown keys.
//!
//! # Example
//!
//! ```rust
//! use formtree::config::{ConfigPatch, ConfigStore};
//!
//! let mut store = ConfigStore::default();
//! let patch: ConfigPatch =
//!     serde_json::from_str(r#"{ "trigger_attr": "data-action", "bogus": 1 }"#).unwrap();
//! assert_eq!(store.apply(patch).trigger_attr, "data-action");
//! assert_eq!(store.reset().trigger_attr, "action");
//! ```

use crate::tree::GroupingStrategy;
use serde::{Deserialize, Serialize};

/// The full set of engine options.
///
/// Replaced wholesale by [`ConfigStore::apply`]; never mutated field by
/// field from outside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Form attribute holding the destination URL (or trigger name).
    pub trigger_attr: String,
    /// Form attribute holding the HTTP verb.
    pub method_attr: String,
    /// Form attribute naming the registered response callback.
    pub callback_attr: String,
    /// Form attribute naming the output-sink region for the response.
    pub terminal_attr: String,
    /// Element attribute exempting an element from value clearing.
    pub fixed_attr: String,
    /// Element attribute marking that a change should submit the form.
    pub autosubmit_attr: String,
    /// Wrapping key for forms with neither a name nor an id.
    /// `None` disables fallback wrapping entirely.
    pub wrap_key: Option<String>,
    /// Registered payload transform applied before transport.
    /// `None` sends the tree serialized as JSON without a named transform.
    pub transform: Option<String>,
    /// Which value-tree builder collection uses.
    pub strategy: GroupingStrategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trigger_attr: "action".to_string(),
            method_attr: "method".to_string(),
            callback_attr: "onreturn".to_string(),
            terminal_attr: "terminal".to_string(),
            fixed_attr: "disabled".to_string(),
            autosubmit_attr: "autosubmit".to_string(),
            wrap_key: Some("unnamed".to_string()),
            transform: Some("json".to_string()),
            strategy: GroupingStrategy::ColonPath,
        }
    }
}

/// A partial config: only the set fields are applied.
///
/// Unknown keys in a serialized patch are dropped during deserialization —
/// only recognized options ever reach the store. `wrap_key` and
/// `transform` are doubly optional so a patch can distinguish "leave
/// as-is" (absent) from "disable" (explicit null).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigPatch {
    /// New trigger attribute name.
    pub trigger_attr: Option<String>,
    /// New method attribute name.
    pub method_attr: Option<String>,
    /// New callback attribute name.
    pub callback_attr: Option<String>,
    /// New terminal attribute name.
    pub terminal_attr: Option<String>,
    /// New fixed attribute name.
    pub fixed_attr: Option<String>,
    /// New autosubmit attribute name.
    pub autosubmit_attr: Option<String>,
    /// New fallback wrap key, with `Some(None)` disabling wrapping.
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub wrap_key: Option<Option<String>>,
    /// New transform id, with `Some(None)` clearing it.
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub transform: Option<Option<String>>,
    /// New grouping strategy.
    pub strategy: Option<GroupingStrategy>,
}

/// Serde adapter distinguishing an absent field from an explicit null.
mod double_option {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<T, S>(value: &Option<Option<T>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        match value {
            Some(inner) => inner.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Ok(Some(Option::deserialize(deserializer)?))
    }
}

/// The active config plus one restore slot.
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    active: Config,
    backup: Option<Config>,
}

impl ConfigStore {
    /// Creates a store with the given active config and no backup.
    pub fn new(active: Config) -> Self {
        Self {
            active,
            backup: None,
        }
    }

    /// Returns the active config.
    pub fn active(&self) -> &Config {
        &self.active
    }

    /// Applies a patch, snapshotting the previous config first.
    ///
    /// The snapshot overwrites any earlier backup: only one level of
    /// restore exists.
    pub fn apply(&mut self, patch: ConfigPatch) -> &Config {
        self.backup = Some(self.active.clone());

        let ConfigPatch {
            trigger_attr,
            method_attr,
            callback_attr,
            terminal_attr,
            fixed_attr,
            autosubmit_attr,
            wrap_key,
            transform,
            strategy,
        } = patch;

        if let Some(v) = trigger_attr {
            self.active.trigger_attr = v;
        }
        if let Some(v) = method_attr {
            self.active.method_attr = v;
        }
        if let Some(v) = callback_attr {
            self.active.callback_attr = v;
        }
        if let Some(v) = terminal_attr {
            self.active.terminal_attr = v;
        }
        if let Some(v) = fixed_attr {
            self.active.fixed_attr = v;
        }
        if let Some(v) = autosubmit_attr {
            self.active.autosubmit_attr = v;
        }
        if let Some(v) = wrap_key {
            self.active.wrap_key = v;
        }
        if let Some(v) = transform {
            self.active.transform = v;
        }
        if let Some(v) = strategy {
            self.active.strategy = v;
        }

        &self.active
    }

    /// Restores the backed-up config, if one exists.
    ///
    /// Without a backup this is a logged no-op returning the active config
    /// unchanged.
    pub fn reset(&mut self) -> &Config {
        match self.backup.take() {
            Some(previous) => self.active = previous,
            None => tracing::debug!("config reset requested with no backup, keeping active config"),
        }
        &self.active
    }
}
