use reqwest::blocking::Response;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, Result};

pub(crate) const APPLICATION_JSON: &str = "application/json";

/// Body argument for operations that send nothing.
///
/// Spelling out `None::<&()>` at every call site gets old fast, so the
/// crate exports this constant instead.
pub const NO_BODY: Option<&()> = None;

/// Where and how a single API call goes over the wire.
///
/// Paths are relative to the versioned base URL and start with `/`. The
/// content type defaults to `application/json` and no `Accept` header is
/// sent unless one is set.
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub(crate) method: Method,
    pub(crate) path: String,
    content_type: Option<String>,
    accept: Option<String>,
}

impl Endpoint {
    /// Create a descriptor for a single call.
    ///
    /// # Arguments
    /// * `method` - The HTTP method to dispatch with.
    /// * `path` - The path relative to the versioned base URL.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Endpoint {
            method,
            path: path.into(),
            content_type: None,
            accept: None,
        }
    }

    /// Replaces the default `application/json` content type.
    pub fn content_type(mut self, value: impl Into<String>) -> Self {
        self.content_type = Some(value.into());
        self
    }

    /// Sets an explicit `Accept` header.
    pub fn accept(mut self, value: impl Into<String>) -> Self {
        self.accept = Some(value.into());
        self
    }

    pub(crate) fn content_type_or_default(&self) -> &str {
        self.content_type.as_deref().unwrap_or(APPLICATION_JSON)
    }

    pub(crate) fn accept_header(&self) -> Option<&str> {
        self.accept.as_deref()
    }
}

/// Serializes an optional request body.
///
/// An absent value becomes an empty buffer rather than JSON `null`; the
/// remote treats a zero-length payload as "no body".
pub(crate) fn encode_body<B>(body: Option<&B>) -> Result<Vec<u8>>
where
    B: Serialize + ?Sized,
{
    match body {
        Some(value) => serde_json::to_vec(value).map_err(Error::Encode),
        None => Ok(Vec::new()),
    }
}

/// Reads a response to the end and deserializes the whole buffer.
///
/// Draining the body is what hands the connection back, so the read runs
/// to completion before the parse is attempted in one shot.
pub(crate) fn decode_response<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    let buffer = response.bytes()?;
    serde_json::from_slice(&buffer).map_err(Error::Decode)
}
