//! Response builders shared by the Lambda adapter and the local server.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::error;

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_TEXT: &str = "text/plain; charset=utf-8";

/// Top-level `error` text of every pipeline failure response.
pub const PROCESSING_FAILED: &str = "Falha ao processar o pedido.";

/// Transport-neutral HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl ApiResponse {
    /// Proxy-integration shape expected from a Lambda behind API Gateway or a
    /// function URL. CORS is wide open, as for every route of this service.
    #[must_use]
    pub fn into_lambda(self) -> Value {
        json!({
            "statusCode": self.status,
            "headers": {
                "Content-Type": self.content_type,
                "Access-Control-Allow-Origin": "*",
                "Access-Control-Allow-Methods": "GET,OPTIONS",
                "Access-Control-Allow-Headers": "*",
            },
            "body": self.body,
        })
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, [(header::CONTENT_TYPE, self.content_type)], self.body).into_response()
    }
}

/// Returns a 200 OK response with a plain-text body.
#[must_use]
pub fn ok_text(text: &str) -> ApiResponse {
    ApiResponse {
        status: 200,
        content_type: CONTENT_TYPE_TEXT,
        body: text.to_string(),
    }
}

/// Returns a 200 OK response with `value` serialized as JSON.
#[must_use]
pub fn ok_json<T: Serialize>(value: &T) -> ApiResponse {
    match serde_json::to_string(value) {
        Ok(body) => ApiResponse {
            status: 200,
            content_type: CONTENT_TYPE_JSON,
            body,
        },
        Err(e) => {
            error!("Failed to serialize response body: {}", e);
            err_response(500, PROCESSING_FAILED, Some(&e.to_string()))
        }
    }
}

/// Returns a 204 No Content response, used for CORS preflight.
#[must_use]
pub fn no_content() -> ApiResponse {
    ApiResponse {
        status: 204,
        content_type: CONTENT_TYPE_TEXT,
        body: String::new(),
    }
}

/// Returns an error response `{ "error": message, "details": details }`.
#[must_use]
pub fn err_response(status_code: u16, message: &str, details: Option<&str>) -> ApiResponse {
    let body = match details {
        Some(details) => json!({ "error": message, "details": details }),
        None => json!({ "error": message }),
    };

    ApiResponse {
        status: status_code,
        content_type: CONTENT_TYPE_JSON,
        body: body.to_string(),
    }
}
