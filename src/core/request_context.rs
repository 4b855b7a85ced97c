//! Ambient request context carried into log records

use serde::{Deserialize, Serialize};

/// Key under which the request identifier is exposed in structured output.
pub const REQUEST_ID_KEY: &str = "requestId";

/// Correlation data attached to a logger or to a single call.
///
/// Deliberately narrow: it carries a request identifier and nothing else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    #[serde(rename = "requestId", skip_serializing_if = "Option::is_none")]
    request_id: Option<String>,
}

impl RequestContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context for the given request identifier
    ///
    /// An empty identifier yields a context without a request id.
    pub fn with_request_id(request_id: impl Into<String>) -> Self {
        let request_id = request_id.into();
        Self {
            request_id: (!request_id.is_empty()).then_some(request_id),
        }
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}

/// Attach a request identifier to an existing context.
///
/// Returns `ctx` untouched when there is no context or `request_id` is empty.
pub fn set_request_id(ctx: Option<RequestContext>, request_id: &str) -> Option<RequestContext> {
    match ctx {
        Some(mut ctx) if !request_id.is_empty() => {
            ctx.request_id = Some(request_id.to_string());
            Some(ctx)
        }
        other => other,
    }
}

/// Read the request identifier from a context, empty when none is present.
pub fn get_request_id(ctx: Option<&RequestContext>) -> &str {
    ctx.and_then(RequestContext::request_id).unwrap_or("")
}
