//! Uniform JSON response envelope shared by every route.

use std::collections::BTreeMap;

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// `{statusCode, headers, body}` as returned by a function runtime handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    /// Serialized JSON document.
    pub body: String,
}

impl Envelope {
    pub fn json<T: Serialize>(body: &T, status: StatusCode) -> Self {
        let body = serde_json::to_string(body).unwrap_or_else(|e| {
            error!(error = %e, "failed to serialize response body");
            String::from("{}")
        });

        Self {
            status_code: status.as_u16(),
            headers: BTreeMap::from([("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string())]),
            body,
        }
    }

    pub fn ok<T: Serialize>(body: &T) -> Self {
        Self::json(body, StatusCode::OK)
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut response = (status, self.body).into_response();
        response
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        response
    }
}
