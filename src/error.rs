use thiserror::Error;

/// Failures surfaced by the TMDB client.
///
/// An unreachable host and a non-success status both land in [`Network`];
/// the catalog never branches on status codes. A body that does not match
/// the expected schema is a [`Decode`].
///
/// [`Network`]: ApiError::Network
/// [`Decode`]: ApiError::Decode
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
