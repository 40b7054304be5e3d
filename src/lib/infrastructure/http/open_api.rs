//! OpenAPI module

use axum::Json;
use utoipa::OpenApi;

use crate::{
    domain::mailing::mailer::SendReceipt,
    infrastructure::http::{
        handlers::v1::*,
        responses::ResponseEnvelope,
        state::{ApiVersion, AppEnvironment},
    },
};

/// OpenAPI documentation
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "Mail Courier"),
    paths(send_email::handler, uptime::handler),
    components(schemas(
        send_email::SendEmailBody,
        uptime::UptimeResponse,
        SendReceipt,
        ResponseEnvelope,
        AppEnvironment,
        ApiVersion,
    ))
)]
pub struct ApiDocs;

/// Serve the OpenAPI document
pub async fn handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDocs::openapi())
}
