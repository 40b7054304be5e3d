//! API handler modules

use std::any::Any;

use axum::{
    body::Body,
    http::{Response, StatusCode},
    response::IntoResponse,
};

use super::responses::ResponseEnvelope;

pub mod v1;

/// Catch panics and return a 500 envelope
pub fn panic_handler(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Internal server error".to_string()
    };

    ResponseEnvelope::failure(&details, StatusCode::INTERNAL_SERVER_ERROR).into_response()
}
