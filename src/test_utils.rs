use std::time::Duration;

use httpmock::MockServer;
use serde::{Serialize, Serializer};

use crate::client::Client;
use crate::config::ClientConfig;
use crate::pagination::PagingPolicy;

pub const TEST_TOKEN: &str = "api.token.123";

/// Client wired to a local mock server, with pacing switched off.
pub fn test_client(server: &MockServer) -> Client {
    test_client_with_paging(
        server,
        PagingPolicy {
            delay: Duration::ZERO,
            max_pages: None,
        },
    )
}

/// Client wired to a local mock server with an explicit paging policy.
pub fn test_client_with_paging(server: &MockServer, paging: PagingPolicy) -> Client {
    let config = ClientConfig {
        api_host: Some(server.base_url()),
        environment: None,
        timeout: Duration::from_secs(5),
        paging,
    };

    Client::with_config(TEST_TOKEN, config).expect("client should build against the mock server")
}

/// A body whose serialization always fails; used to exercise encode errors.
pub struct Unserializable;

impl Serialize for Unserializable {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Err(serde::ser::Error::custom("always fails"))
    }
}
