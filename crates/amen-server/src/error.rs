use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::net::SocketAddr;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ServerError {
    /// Startup failed while loading configuration or the verse table.
    #[error(transparent)]
    Core(#[from] amen_core::Error),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),

    /// A request handler panicked.
    #[error("Handler panicked: {0}")]
    Panic(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        // Details stay in the log; clients get a fixed body.
        error!("{self}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Internal server error" })),
        )
            .into_response()
    }
}
