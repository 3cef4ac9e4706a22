//! Error card shown when a route's data fetch fails.

use obot_core::api::ApiError;

/// Display values for the route error card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteErrorView {
    pub status: Option<u16>,
    pub status_text: String,
    /// Response body or error detail, when there is one worth showing.
    pub detail: Option<String>,
}

impl RouteErrorView {
    /// Card heading, e.g. "Oops! 404".
    pub fn title(&self) -> String {
        match self.status {
            Some(status) => format!("Oops! {status}"),
            None => "Oops!".to_string(),
        }
    }
}

impl From<&ApiError> for RouteErrorView {
    fn from(error: &ApiError) -> Self {
        match error {
            ApiError::Status { status, body, .. } => Self {
                status: Some(*status),
                status_text: status_text(*status).to_string(),
                detail: (!body.is_empty()).then(|| body.clone()),
            },
            other => Self {
                status: None,
                status_text: "Request failed".to_string(),
                detail: Some(other.to_string()),
            },
        }
    }
}

fn status_text(status: u16) -> &'static str {
    match status {
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        408 => "Request Timeout",
        409 => "Conflict",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "Error",
    }
}
