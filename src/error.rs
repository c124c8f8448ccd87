use thiserror::Error;

/// Failures surfaced by a profile store. Each one is scoped to the single
/// operation that triggered it; callers own the user-visible messaging and
/// never retry automatically.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Logical 404 for the requested id (get/delete by id only).
    #[error("Profile not found: {0}")]
    NotFound(String),

    /// The server responded, but with a non-success status.
    #[error("Request failed: HTTP {status}")]
    RequestFailed { status: u16 },

    /// No usable response was obtained from the server.
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body does not match the expected JSON shape.
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}
