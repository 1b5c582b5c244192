use thiserror::Error;

/// Top-level error type for the `postcodes-api` crate.
///
/// Upstream failures that arrive wrapped in a well-formed envelope (404 for
/// an unknown postcode, 400 for a malformed batch) are *not* errors: they
/// come back as an ordinary [`Response`](crate::Response) whose `status`
/// carries the failure. This enum covers everything that prevents an
/// envelope from being produced at all.
#[derive(Debug, Error)]
pub enum Error {
    /// A blank or whitespace-only API root was supplied at construction.
    /// Use the default constructor for the stock postcodes.io root.
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// HTTP transport error (connection refused, DNS failure, timeout, TLS).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The built request path failed URL parsing.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The response body was present but was not a valid envelope for the
    /// expected shape. Carries the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this is a transport-level failure (the request
    /// never produced a response body to decode).
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
