use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum FeedError {
    /// The feed answered but its body does not have the layout documented by the network.
    #[error("Unexpected {network} feed payload: {reason}")]
    UnexpectedPayload {
        network: &'static str,
        reason: String,
    },
    #[error("The {0} feed payload does not contain a pilot list")]
    MissingPilots(&'static str),
}

impl IntoResponse for FeedError {
    fn into_response(self) -> Response {
        tracing::warn!("{}", self);

        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorDto {
                error: "Online network data is currently unavailable".to_string(),
            }),
        )
            .into_response()
    }
}
