use std::fmt;

use async_trait::async_trait;

use crate::core::show::Show;

/// Errors that can occur loading the show catalog.
/// None of these are fatal to the app: the list pane renders an inline
/// error and the user retries by reloading.
#[derive(Debug)]
pub enum CatalogError {
    /// The shows document is missing at the configured URL (HTTP 404).
    NotFound,
    /// The server answered with some other non-success status.
    Api { status: u16, message: String },
    /// Transport-level failure (DNS, connection refused, timeout).
    Network(String),
    /// The payload was not a valid show catalog.
    Parse(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::NotFound => write!(f, "shows document not found"),
            CatalogError::Api { status, message } => {
                write!(f, "server error (HTTP {status}): {message}")
            }
            CatalogError::Network(msg) => write!(f, "network error: {msg}"),
            CatalogError::Parse(msg) => write!(f, "invalid shows document: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Anything that can produce the show catalog.
///
/// Implementations return shows already sorted ascending by date (stable for
/// ties) — display indices are assigned from this order and nothing
/// downstream re-sorts. An empty vec is a valid success, distinct from any
/// error variant.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Where the shows come from, for the log and the error pane.
    fn origin(&self) -> &str;

    async fn fetch(&self) -> Result<Vec<Show>, CatalogError>;
}
