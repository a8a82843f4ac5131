//! Error types for the flightdeck server.
//!
//! Domain errors (configuration, network feeds) live in their own modules and are folded into
//! the main [`Error`] type. All errors implement `IntoResponse` for Axum and use `thiserror`
//! for their `Display` and `Error` implementations.

pub mod config;
pub mod feed;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, feed::FeedError},
};

/// Main error type for the flightdeck server.
///
/// Services return this type and propagate lower level failures with `?`. Repository methods
/// return `sea_orm::DbErr` which converts automatically.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Online network feed returned something we could not use.
    #[error(transparent)]
    FeedError(#[from] FeedError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// HTTP client error while downloading a network feed.
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// I/O error while binding or serving the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// Configuration and feed errors have their own mappings, everything else becomes a logged
/// 500 Internal Server Error.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::FeedError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged, the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
