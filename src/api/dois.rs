//! Digital Object Identifier associations for datasets.

use reqwest::Method;

use crate::client::Client;
use crate::error::Result;
use crate::models::SuccessResponse;
use crate::request::{Endpoint, NO_BODY};

/// Associates a DOI with a dataset.
pub fn associate(
    client: &Client,
    owner: &str,
    datasetid: &str,
    doi: &str,
) -> Result<SuccessResponse> {
    let endpoint = Endpoint::new(
        Method::PUT,
        format!("/datasets/{}/{}/dois/{}", owner, datasetid, doi),
    );
    client.perform(&endpoint, NO_BODY)
}

/// Associates a DOI with a specific version of a dataset.
pub fn associate_with_version(
    client: &Client,
    owner: &str,
    datasetid: &str,
    versionid: &str,
    doi: &str,
) -> Result<SuccessResponse> {
    let endpoint = Endpoint::new(
        Method::PUT,
        format!("/datasets/{}/{}/v/{}/dois/{}", owner, datasetid, versionid, doi),
    );
    client.perform(&endpoint, NO_BODY)
}

/// Removes a DOI associated with a dataset.
pub fn delete(client: &Client, owner: &str, datasetid: &str, doi: &str) -> Result<SuccessResponse> {
    let endpoint = Endpoint::new(
        Method::DELETE,
        format!("/datasets/{}/{}/dois/{}", owner, datasetid, doi),
    );
    client.perform(&endpoint, NO_BODY)
}

/// Removes a DOI associated with a specific version of a dataset.
pub fn delete_from_version(
    client: &Client,
    owner: &str,
    datasetid: &str,
    versionid: &str,
    doi: &str,
) -> Result<SuccessResponse> {
    let endpoint = Endpoint::new(
        Method::DELETE,
        format!("/datasets/{}/{}/v/{}/dois/{}", owner, datasetid, versionid, doi),
    );
    client.perform(&endpoint, NO_BODY)
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::test_utils::test_client;

    #[test]
    fn test_associate_with_version_puts_to_the_versioned_path() {
        // Arrange
        let server = MockServer::start();
        let client = test_client(&server);
        let mock = server.mock(|when, then| {
            when.method(PUT).path(
                "/v0/datasets/jonloyens/my-awesome-dataset/v/some.version.identifier/dois/10.1234-example",
            );
            then.status(200)
                .json_body(json!({"message": "DOI associated successfully."}));
        });

        // Act
        let response = associate_with_version(
            &client,
            "jonloyens",
            "my-awesome-dataset",
            "some.version.identifier",
            "10.1234-example",
        )
        .unwrap();

        // Assert
        assert_eq!(
            response.message.as_deref(),
            Some("DOI associated successfully.")
        );
        mock.assert();
    }

    #[test]
    fn test_delete_targets_the_doi_resource() {
        // Arrange
        let server = MockServer::start();
        let client = test_client(&server);
        let mock = server.mock(|when, then| {
            when.method(DELETE)
                .path("/v0/datasets/jonloyens/my-awesome-dataset/dois/10.1234-example");
            then.status(200)
                .json_body(json!({"message": "DOI deleted successfully."}));
        });

        // Act
        let response = delete(
            &client,
            "jonloyens",
            "my-awesome-dataset",
            "10.1234-example",
        )
        .unwrap();

        // Assert
        assert_eq!(response.message.as_deref(), Some("DOI deleted successfully."));
        mock.assert();
    }
}
