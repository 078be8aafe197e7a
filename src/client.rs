use std::fs::File;
use std::io;
use std::path::Path;

use reqwest::blocking::{Body, Client as HttpClient, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::pagination::PagingPolicy;
use crate::request::{decode_response, encode_body, Endpoint};

/// A session against one deployment of the data.world API.
///
/// The session is immutable once constructed, so a single instance can be
/// shared across threads behind a reference; every operation borrows it
/// for exactly one round-trip.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    token: String,
    http: HttpClient,
    pub(crate) paging: PagingPolicy,
}

impl Client {
    /// Session configured from the process environment.
    ///
    /// `DW_API_HOST` takes the base URL verbatim, `DW_ENVIRONMENT` picks a
    /// named deployment; with neither, production is used.
    pub fn new(token: &str) -> Result<Self> {
        Self::with_config(token, ClientConfig::from_env())
    }

    /// Session with fully injected configuration; nothing is read from
    /// the environment.
    ///
    /// # Arguments
    /// * `token` - The API token, sent as a bearer credential.
    /// * `config` - Connection settings, see [`ClientConfig`].
    pub fn with_config(token: &str, config: ClientConfig) -> Result<Self> {
        let http = HttpClient::builder().timeout(config.timeout).build()?;

        Ok(Client {
            base_url: config.base_url(),
            token: token.to_string(),
            http,
            paging: config.paging,
        })
    }

    /// The versioned base URL this session talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One round-trip: encode, dispatch, classify, decode.
    ///
    /// The response stream is drained whole before decoding, so the
    /// connection is released by the time this returns, on the error
    /// paths as much as on success.
    pub fn perform<B, T>(&self, endpoint: &Endpoint, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.perform_raw(endpoint, body)?;
        decode_response(response)
    }

    /// Like [`perform`](Self::perform), but hands the open response back
    /// instead of decoding it. Reading and thereby releasing the stream
    /// becomes the caller's job.
    pub fn perform_raw<B>(&self, endpoint: &Endpoint, body: Option<&B>) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        let payload = encode_body(body)?;
        self.raw_request(endpoint, payload)
    }

    /// Round-trip with a caller-supplied byte stream as the body. Uploads
    /// and stream appends go through here; their payloads are never
    /// JSON-encoded.
    pub(crate) fn stream_request(
        &self,
        endpoint: &Endpoint,
        body: impl Into<Body>,
    ) -> Result<Response> {
        self.raw_request(endpoint, body)
    }

    fn raw_request(&self, endpoint: &Endpoint, body: impl Into<Body>) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint.path);
        debug!(method = %endpoint.method, url = %url, "dispatching request");

        let mut request = self
            .http
            .request(endpoint.method.clone(), url.as_str())
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(CONTENT_TYPE, endpoint.content_type_or_default());

        if let Some(accept) = endpoint.accept_header() {
            request = request.header(ACCEPT, accept);
        }

        let response = request.body(body).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Remote {
                status: status_line(status),
            });
        }

        Ok(response)
    }
}

/// Copies a raw response body into a local file, consuming the stream.
pub fn save_to_file(path: impl AsRef<Path>, mut response: Response) -> Result<()> {
    let mut file = File::create(path)?;
    io::copy(&mut response, &mut file)?;
    Ok(())
}

fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}
