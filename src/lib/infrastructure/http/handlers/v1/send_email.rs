//! Send email handler

use axum::{
    extract::{rejection::JsonRejection, MatchedPath, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::{
    domain::{
        mailing::{errors::SendEmailError, request::EmailRequest, service::MailingService},
        validation::ValidationError,
    },
    infrastructure::http::{
        responses::{ResponseEnvelope, UNKNOWN_ERROR_MESSAGE},
        state::AppState,
    },
};

/// Confirmation message returned when the email was dispatched
pub const EMAIL_SENT_MESSAGE: &str = "Email send successfully.";

/// Send email request body
///
/// Unknown fields are rejected.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct SendEmailBody {
    /// The subject of the email
    #[schema(example = "Weekly Update")]
    subject: Option<String>,

    /// The recipient's email address
    #[schema(example = "user@example.com")]
    email: Option<String>,
}

impl TryFrom<SendEmailBody> for EmailRequest {
    type Error = ValidationError;

    fn try_from(body: SendEmailBody) -> Result<Self, Self::Error> {
        EmailRequest::parse(
            body.subject.as_deref().unwrap_or_default(),
            body.email.as_deref().unwrap_or_default(),
        )
    }
}

/// Send an email
#[utoipa::path(
    post,
    operation_id = "send_email",
    tag = "Mailing",
    path = "/send-email",
    request_body = SendEmailBody,
    responses(
        (status = StatusCode::CREATED, description = "Email dispatched", body = ResponseEnvelope),
        (status = StatusCode::UNPROCESSABLE_ENTITY, description = "Validation failed", body = ResponseEnvelope),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "Transport failure", body = ResponseEnvelope),
    )
)]
pub async fn handler<M: MailingService>(
    State(state): State<AppState<M>>,
    matched_path: MatchedPath,
    request: Result<Json<SendEmailBody>, JsonRejection>,
) -> ResponseEnvelope {
    let route = matched_path.as_str().to_string();

    let Json(body) = match request {
        Ok(json) => json,
        Err(rejection) => {
            return ResponseEnvelope::failure(&rejection.body_text(), rejection.status())
                .with_route(&route)
        }
    };

    let email_request: EmailRequest = match body.try_into() {
        Ok(request) => request,
        Err(error) => {
            return ResponseEnvelope::failure(&error.to_string(), StatusCode::UNPROCESSABLE_ENTITY)
                .with_route(&route)
        }
    };

    let envelope = match state.mailing.send_email(&email_request).await {
        Ok(receipt) => {
            ResponseEnvelope::success(receipt, EMAIL_SENT_MESSAGE, StatusCode::CREATED)
        }
        Err(error) => {
            error!("failed to send email: {error}");

            let message = match &error {
                SendEmailError::Transport(transport) => transport.to_string(),
                SendEmailError::UnknownError(_) => UNKNOWN_ERROR_MESSAGE.to_string(),
            };

            ResponseEnvelope::failure(&message, StatusCode::INTERNAL_SERVER_ERROR)
        }
    };

    envelope.with_route(&route)
}
