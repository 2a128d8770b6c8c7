use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Body of every contract endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub feedback: String,
}

impl Feedback {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            feedback: message.into(),
        }
    }
}

impl IntoResponse for Feedback {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
