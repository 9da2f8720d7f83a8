//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. `TodoApi` builds `HttpRequest`
//! values and parses `HttpResponse` values without ever touching the
//! network; whoever owns the socket (the `UreqTodoService`, or a test)
//! executes the round-trip in between. This keeps the wire format
//! deterministic and testable offline.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `TodoApi::build_*` methods. The caller executes it against the
/// network and returns the corresponding `HttpResponse`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the caller after executing an `HttpRequest`, then passed
/// to `TodoApi::parse_*` methods for interpretation.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// Whether the status is in the 2xx range. The store treats every
    /// non-2xx answer uniformly, so this is the only classification the
    /// parser needs.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
