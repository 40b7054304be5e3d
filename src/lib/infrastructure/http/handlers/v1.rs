//! API route handlers

use axum::{
    http::{StatusCode, Uri},
    routing::{get, post},
    Router,
};

use crate::{
    domain::mailing::service::MailingService,
    infrastructure::http::{responses::ResponseEnvelope, state::AppState},
};

pub mod send_email;
pub mod uptime;

/// Create the router for the API routes
pub fn router<M: MailingService>() -> Router<AppState<M>> {
    Router::new()
        .route(
            "/send-email",
            post(send_email::handler).fallback(method_not_supported),
        )
        .route("/uptime", get(uptime::handler))
}

/// Shared handler for known routes hit with an unsupported method
pub async fn method_not_supported(uri: Uri) -> ResponseEnvelope {
    ResponseEnvelope::failure("Method not supported.", StatusCode::METHOD_NOT_ALLOWED)
        .with_route(uri.path())
}

/// Fallback for unknown routes
pub async fn route_not_found(uri: Uri) -> ResponseEnvelope {
    ResponseEnvelope::failure("Route not found.", StatusCode::NOT_FOUND).with_route(uri.path())
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use testresult::TestResult;

    use crate::infrastructure::http::{
        responses::ResponseEnvelope, router, state::test_state, test_config,
    };

    #[tokio::test]
    async fn test_unknown_route_yields_not_found_envelope() -> TestResult {
        let response = TestServer::new(router(test_state(None), &test_config())?)?
            .get("/missing")
            .await;

        let json = response.json::<ResponseEnvelope>();

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(json.message, "Route not found.");
        assert_eq!(json.route.as_deref(), Some("/missing"));

        Ok(())
    }

    #[tokio::test]
    async fn test_unsupported_method_never_reaches_the_use_case() -> TestResult {
        // The default mock panics on any unexpected call
        let response = TestServer::new(router(test_state(None), &test_config())?)?
            .get("/send-email")
            .await;

        let json = response.json::<ResponseEnvelope>();

        assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(json.message, "Method not supported.");
        assert_eq!(json.route.as_deref(), Some("/send-email"));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_method_is_not_supported_either() -> TestResult {
        let response = TestServer::new(router(test_state(None), &test_config())?)?
            .delete("/send-email")
            .await;

        assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);

        Ok(())
    }
}
