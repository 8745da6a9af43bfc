//! Orders service errors.

use thiserror::Error;

/// Errors that can occur when talking to the remote order endpoints.
#[derive(Debug, Error)]
pub enum OrdersError {
    /// The identifier names no order on the server.
    #[error("order not found")]
    NotFound,

    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The order API returned a non-2xx response or unexpected body.
    #[error("unexpected response from order API: {0}")]
    UnexpectedResponse(String),
}
