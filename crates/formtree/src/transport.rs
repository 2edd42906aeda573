// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Transport capability.
//!
//! The engine never performs HTTP itself. Hosts inject an implementation
//! of [`Transport`], a trait with one verb-named method per supported HTTP
//! verb, each taking a request and a completion callback. Replies —
//! success bodies and opaque failures alike — are always forwarded to the
//! callback, never swallowed or retried.
//!
//! [`MemoryTransport`] is an in-process implementation that records every
//! dispatched request and replies immediately, for tests and examples.

use std::cell::RefCell;
use std::fmt;
use std::str::FromStr;

/// A request handed to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    /// Destination URL, from the form's trigger attribute.
    pub url: String,
    /// Serialized payload, produced by the configured transform.
    pub payload: String,
}

/// What the transport reports back on completion.
///
/// Failure content is opaque to the engine; it is passed through to the
/// resolved callback verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportReply {
    /// The raw response body.
    Success(String),
    /// An opaque transport-level failure description.
    Failure(String),
}

impl TransportReply {
    /// Returns the carried body or failure text.
    pub fn body(&self) -> &str {
        match self {
            TransportReply::Success(body) => body,
            TransportReply::Failure(body) => body,
        }
    }
}

/// Completion callback invoked once per dispatched request.
pub type TransportCallback = Box<dyn FnOnce(TransportReply)>;

/// An HTTP verb parsed from a form's method attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// HTTP GET.
    Get,
    /// HTTP POST.
    Post,
    /// HTTP PUT.
    Put,
    /// HTTP DELETE.
    Delete,
    /// HTTP PATCH.
    Patch,
}

impl Verb {
    /// The lower-case verb name, matching the transport method it selects.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "get",
            Verb::Post => "post",
            Verb::Put => "put",
            Verb::Delete => "delete",
            Verb::Patch => "patch",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verb {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, ()> {
        // Method attributes arrive in whatever case the markup used.
        match s.to_ascii_lowercase().as_str() {
            "get" => Ok(Verb::Get),
            "post" => Ok(Verb::Post),
            "put" => Ok(Verb::Put),
            "delete" => Ok(Verb::Delete),
            "patch" => Ok(Verb::Patch),
            _ => Err(()),
        }
    }
}

/// Injected request capability with one method per verb.
///
/// Implementations decide how (and when) the callback runs: synchronously,
/// on a later turn of an event loop, or never for a transport that drops
/// requests. The engine guarantees only that it hands over one callback
/// per dispatch.
pub trait Transport {
    /// Issues a GET request.
    fn get(&self, request: TransportRequest, callback: TransportCallback);
    /// Issues a POST request.
    fn post(&self, request: TransportRequest, callback: TransportCallback);
    /// Issues a PUT request.
    fn put(&self, request: TransportRequest, callback: TransportCallback);
    /// Issues a DELETE request.
    fn delete(&self, request: TransportRequest, callback: TransportCallback);
    /// Issues a PATCH request.
    fn patch(&self, request: TransportRequest, callback: TransportCallback);

    /// Routes a request to the verb-named method.
    fn dispatch(&self, verb: Verb, request: TransportRequest, callback: TransportCallback) {
        match verb {
            Verb::Get => self.get(request, callback),
            Verb::Post => self.post(request, callback),
            Verb::Put => self.put(request, callback),
            Verb::Delete => self.delete(request, callback),
            Verb::Patch => self.patch(request, callback),
        }
    }
}

/// In-process transport that records requests and replies immediately.
///
/// # Example
///
/// ```rust
/// use formtree::transport::{MemoryTransport, Transport, TransportReply, TransportRequest, Verb};
///
/// let transport = MemoryTransport::replying(TransportReply::Success("ok".into()));
/// transport.dispatch(
///     Verb::Post,
///     TransportRequest { url: "/users".into(), payload: "{}".into() },
///     Box::new(|reply| assert_eq!(reply.body(), "ok")),
/// );
/// assert_eq!(transport.sent()[0].0, Verb::Post);
/// ```
#[derive(Default)]
pub struct MemoryTransport {
    sent: RefCell<Vec<(Verb, TransportRequest)>>,
    reply: Option<TransportReply>,
}

impl MemoryTransport {
    /// Creates a transport whose callbacks never fire.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transport that answers every request with `reply`.
    pub fn replying(reply: TransportReply) -> Self {
        Self {
            sent: RefCell::new(Vec::new()),
            reply: Some(reply),
        }
    }

    /// Every request dispatched so far, in order.
    pub fn sent(&self) -> Vec<(Verb, TransportRequest)> {
        self.sent.borrow().clone()
    }

    fn record(&self, verb: Verb, request: TransportRequest, callback: TransportCallback) {
        self.sent.borrow_mut().push((verb, request));
        if let Some(reply) = self.reply.clone() {
            callback(reply);
        }
    }
}

impl Transport for MemoryTransport {
    fn get(&self, request: TransportRequest, callback: TransportCallback) {
        self.record(Verb::Get, request, callback);
    }

    fn post(&self, request: TransportRequest, callback: TransportCallback) {
        self.record(Verb::Post, request, callback);
    }

    fn put(&self, request: TransportRequest, callback: TransportCallback) {
        self.record(Verb::Put, request, callback);
    }

    fn delete(&self, request: TransportRequest, callback: TransportCallback) {
        self.record(Verb::Delete, request, callback);
    }

    fn patch(&self, request: TransportRequest, callback: TransportCallback) {
        self.record(Verb::Patch, request, callback);
    }
}
