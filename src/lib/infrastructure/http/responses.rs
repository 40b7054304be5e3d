//! Uniform response envelope

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fallback message for failures without a usable error message
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred, please try again";

/// The uniform success/error response shape returned by the API
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ResponseEnvelope {
    /// The HTTP status code
    #[schema(example = 201, value_type = u16)]
    #[serde(with = "http_serde::status_code")]
    pub status: StatusCode,

    /// Human-readable outcome message
    #[schema(example = "Email send successfully.")]
    pub message: String,

    /// The route that produced the response
    #[schema(example = "/send-email")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,

    /// Operation payload, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ResponseEnvelope {
    /// Build a success envelope
    ///
    /// Callers are responsible for passing a coherent HTTP status; no sanity
    /// check is performed here.
    pub fn success<T: Serialize>(data: T, message: &str, status: StatusCode) -> Self {
        Self {
            status,
            message: message.to_string(),
            route: None,
            data: serde_json::to_value(data).ok(),
        }
    }

    /// Build a failure envelope
    pub fn failure(message: &str, status: StatusCode) -> Self {
        Self {
            status,
            message: message.to_string(),
            route: None,
            data: None,
        }
    }

    /// Attach the route the response was produced on
    pub fn with_route(mut self, route: &str) -> Self {
        self.route = Some(route.to_string());
        self
    }
}

impl IntoResponse for ResponseEnvelope {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn test_success_envelope_serializes_all_fields() -> TestResult {
        let envelope = ResponseEnvelope::success(
            json!({ "code": "250" }),
            "Email send successfully.",
            StatusCode::CREATED,
        )
        .with_route("/send-email");

        let response = envelope.into_response();

        assert_eq!(response.status(), StatusCode::CREATED);

        let body = to_bytes(response.into_body(), usize::MAX).await?;
        let json = serde_json::from_slice::<serde_json::Value>(&body)?;

        assert_eq!(
            json,
            json!({
                "status": 201,
                "message": "Email send successfully.",
                "route": "/send-email",
                "data": { "code": "250" },
            })
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_failure_envelope_omits_absent_fields() -> TestResult {
        let envelope =
            ResponseEnvelope::failure("connection refused", StatusCode::INTERNAL_SERVER_ERROR);

        let response = envelope.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await?;

        assert_eq!(
            body,
            r#"{"status":500,"message":"connection refused"}"#.as_bytes()
        );

        Ok(())
    }

    #[test]
    fn test_route_is_appended_without_touching_the_rest() {
        let envelope = ResponseEnvelope::failure("Route not found.", StatusCode::NOT_FOUND)
            .with_route("/missing");

        assert_eq!(envelope.route.as_deref(), Some("/missing"));
        assert_eq!(envelope.message, "Route not found.");
    }
}
