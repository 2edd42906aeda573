// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Error types for formtree.
//!
//! This module defines [`FormError`], the main error enum. Most degraded
//! conditions in formtree (unresolvable callbacks, orphaned group
//! references, transport failures) are *not* errors — they surface as
//! structured diagnostics on the operation's outcome type so callers can
//! assert on them. `FormError` covers the few conditions that abort an
//! operation outright.

use thiserror::Error;

/// The main error type for formtree operations.
///
/// All fallible formtree functions return `Result<T, FormError>`.
#[derive(Error, Debug)]
pub enum FormError {
    /// A form attribute required for submission is absent.
    ///
    /// Submission needs a destination (the trigger attribute, `action` by
    /// default) and an HTTP verb (the method attribute). Either missing
    /// aborts the submit with no request sent.
    #[error("Missing required attribute '{attribute}' on form '{form}'")]
    MissingAttribute {
        /// The attribute name that was expected.
        attribute: String,
        /// A short description of the form (tag plus name/id when present).
        form: String,
    },

    /// The form's method attribute names no known HTTP verb.
    #[error("Unknown HTTP verb '{0}'")]
    UnknownVerb(String),

    /// Payload serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results with [`FormError`].
pub type Result<T> = std::result::Result<T, FormError>;
