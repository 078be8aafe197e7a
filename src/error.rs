use thiserror::Error;

/// Convenience alias used by every fallible operation in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while talking to the API.
///
/// Failures surface exactly once and are never retried or swallowed on
/// the way up.
#[derive(Debug, Error)]
pub enum Error {
    /// The round-trip itself failed: connection, TLS, timeout, or a URL
    /// the HTTP stack refuses to dispatch.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status. The message is the
    /// literal status text of the response and nothing else, so callers
    /// can match on it.
    #[error("{status}")]
    Remote { status: String },

    /// The request body could not be serialized. Raised before any bytes
    /// go over the wire.
    #[error("could not encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("could not decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// A paginated listing failed partway through. Carries the number of
    /// pages that had completed together with the underlying failure; the
    /// records collected so far are discarded.
    #[error("pagination aborted after {pages_fetched} page(s): {source}")]
    Pagination {
        pages_fetched: u32,
        #[source]
        source: Box<Error>,
    },

    /// A listing ran into the configured page cap.
    #[error("page limit of {limit} reached before the listing ended")]
    PageLimit { limit: u32 },

    /// Local file I/O failed while saving a download or reading an upload.
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}
