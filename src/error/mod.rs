//! Application errors and their HTTP mapping.
//!
//! `AppError` is the top-level error for startup, the bot and the health endpoint.
//! `ScrapeError` is confined to the ranking scraper, which converts it into "no match"
//! after logging it.

pub mod config;
pub mod internal;
pub mod scrape;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{config::ConfigError, internal::InternalError},
    model::api::ErrorDto,
};

/// Errors surfaced by startup, the bot and HTTP handlers.
#[derive(Error, Debug)]
pub enum AppError {
    /// Environment variable missing or unusable.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Unexpected internal condition, usually a value that does not fit its target type.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Query, transaction or migration failure.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client construction or request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Gateway or REST failure talking to Discord, boxed to keep the enum small.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Socket or signal handling error.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

/// Boxes the error to keep `AppError` small.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

/// Every variant maps to a 500 with a generic body; details only reach the log.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}

/// Logs the wrapped error and answers with a generic 500 body.
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
