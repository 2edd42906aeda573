// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Output sink.
//!
//! Where responses go when no named callback handles them. The original
//! behavior this replaces — injecting raw response markup into a page
//! region and executing any scripts it carried — is intentionally not
//! reproduced; the sink receives the body as plain text and the host
//! decides how to render it.

use std::cell::RefCell;

/// Render extension point for unhandled responses.
///
/// `region` is the form's terminal-attribute value when present, `None`
/// for the default output region.
pub trait OutputSink {
    /// Writes a response body into the named region.
    fn write(&self, region: Option<&str>, body: &str);
}

/// Sink that records every write, for tests and examples.
#[derive(Debug, Default)]
pub struct MemorySink {
    writes: RefCell<Vec<(Option<String>, String)>>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All writes so far, in order.
    pub fn writes(&self) -> Vec<(Option<String>, String)> {
        self.writes.borrow().clone()
    }
}

impl OutputSink for MemorySink {
    fn write(&self, region: Option<&str>, body: &str) {
        self.writes
            .borrow_mut()
            .push((region.map(|r| r.to_string()), body.to_string()));
    }
}
