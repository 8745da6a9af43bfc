//! Catalog service errors.

use thiserror::Error;

/// Errors that can occur when talking to the remote catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The identifier names no product on the server.
    #[error("product not found")]
    NotFound,

    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog returned a non-2xx response or unexpected body.
    #[error("unexpected response from catalog API: {0}")]
    UnexpectedResponse(String),
}
