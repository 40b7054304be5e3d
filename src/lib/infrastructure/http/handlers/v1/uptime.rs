//! Uptime handler

use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    domain::mailing::service::MailingService,
    infrastructure::http::state::{ApiVersion, AppEnvironment, AppState},
};

/// The uptime response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UptimeResponse {
    /// The uptime of the application in seconds
    #[schema(example = 123)]
    pub uptime: i64,

    /// The environment the process runs in
    pub environment: AppEnvironment,

    /// The published API version
    pub version: ApiVersion,

    /// Identifier of the repository this deployment was built from
    #[schema(example = "example/mail-courier")]
    pub repository: String,
}

/// Get the uptime of the application
#[utoipa::path(
    get,
    operation_id = "uptime",
    tag = "System",
    path = "/uptime",
    responses(
        (status = StatusCode::OK, description = "Uptime response", body = UptimeResponse),
    )
)]
pub async fn handler<M: MailingService>(State(state): State<AppState<M>>) -> Json<UptimeResponse> {
    let uptime = Utc::now().timestamp() - state.start_time.timestamp();

    Json(UptimeResponse {
        uptime,
        environment: state.config.environment,
        version: state.config.version,
        repository: state.config.repository.clone(),
    })
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use chrono::Utc;
    use testresult::TestResult;

    use crate::infrastructure::http::{
        handlers::v1::uptime::UptimeResponse,
        router,
        state::{test_state, ApiVersion, AppEnvironment},
        test_config,
    };

    #[tokio::test]
    async fn test_uptime_handler() -> TestResult {
        let state = test_state(None);
        let start_time = state.start_time;

        let response = TestServer::new(router(state, &test_config())?)?
            .get("/uptime")
            .await;

        let json = response.json::<UptimeResponse>();

        assert_eq!(
            json.uptime,
            Utc::now().timestamp() - start_time.timestamp(),
            "App uptime should be equal to the start time"
        );
        assert_eq!(json.environment, AppEnvironment::Test);
        assert_eq!(json.version, ApiVersion::V1);
        assert_eq!(json.repository, "example/mail-courier");

        response.assert_status_ok();

        Ok(())
    }
}
