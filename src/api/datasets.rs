use reqwest::Method;

use crate::client::Client;
use crate::error::Result;
use crate::models::{
    DatasetCreateRequest, DatasetCreateResponse, DatasetReplaceRequest, DatasetSummaryResponse,
    DatasetUpdateRequest, SuccessResponse,
};
use crate::request::{Endpoint, NO_BODY};

/// Creates a dataset under the owning account.
pub fn create(
    client: &Client,
    owner: &str,
    body: &DatasetCreateRequest,
) -> Result<DatasetCreateResponse> {
    let endpoint = Endpoint::new(Method::POST, format!("/datasets/{}", owner));
    client.perform(&endpoint, Some(body))
}

/// Creates a dataset with the given id, resetting it if it already exists
/// and redefining all of its attributes.
pub fn create_or_replace(
    client: &Client,
    owner: &str,
    datasetid: &str,
    body: &DatasetReplaceRequest,
) -> Result<SuccessResponse> {
    let endpoint = Endpoint::new(Method::PUT, format!("/datasets/{}/{}", owner, datasetid));
    client.perform(&endpoint, Some(body))
}

/// Fetches a dataset definition.
///
/// The definition is returned, not the associated data. Use
/// [`queries::execute_sql`](crate::api::queries::execute_sql) or
/// [`files::download`](crate::api::files::download) to get at the data
/// itself.
pub fn retrieve(client: &Client, owner: &str, datasetid: &str) -> Result<DatasetSummaryResponse> {
    let endpoint = Endpoint::new(Method::GET, format!("/datasets/{}/{}", owner, datasetid));
    client.perform(&endpoint, NO_BODY)
}

/// Fetches a specific version of a dataset definition.
pub fn retrieve_version(
    client: &Client,
    owner: &str,
    datasetid: &str,
    versionid: &str,
) -> Result<DatasetSummaryResponse> {
    let endpoint = Endpoint::new(
        Method::GET,
        format!("/datasets/{}/{}/v/{}", owner, datasetid, versionid),
    );
    client.perform(&endpoint, NO_BODY)
}

/// Updates selected attributes of a dataset.
pub fn update(
    client: &Client,
    owner: &str,
    datasetid: &str,
    body: &DatasetUpdateRequest,
) -> Result<SuccessResponse> {
    let endpoint = Endpoint::new(Method::PATCH, format!("/datasets/{}/{}", owner, datasetid));
    client.perform(&endpoint, Some(body))
}

/// Deletes a dataset and all associated data.
pub fn delete(client: &Client, owner: &str, datasetid: &str) -> Result<SuccessResponse> {
    let endpoint = Endpoint::new(Method::DELETE, format!("/datasets/{}/{}", owner, datasetid));
    client.perform(&endpoint, NO_BODY)
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use httpmock::Method::PATCH;
    use serde_json::json;

    use super::*;
    use crate::test_utils::test_client;

    #[test]
    fn test_create_posts_the_request_body() {
        // Arrange
        let server = MockServer::start();
        let client = test_client(&server);
        let mock = server.mock(|when, then| {
            when.method(POST).path("/v0/datasets/jonloyens").json_body(json!({
                "title": "My Awesome Dataset",
                "visibility": "OPEN"
            }));
            then.status(200).json_body(json!({
                "message": "Dataset created successfully.",
                "uri": "https://data.world/jonloyens/my-awesome-dataset"
            }));
        });

        let body = DatasetCreateRequest {
            title: "My Awesome Dataset".to_string(),
            visibility: "OPEN".to_string(),
            ..Default::default()
        };

        // Act
        let response = create(&client, "jonloyens", &body).unwrap();

        // Assert
        assert_eq!(
            response.uri,
            "https://data.world/jonloyens/my-awesome-dataset"
        );
        mock.assert();
    }

    #[test]
    fn test_retrieve_decodes_the_summary() {
        // Arrange
        let server = MockServer::start();
        let client = test_client(&server);
        let mock = server.mock(|when, then| {
            when.method(GET).path("/v0/datasets/jonloyens/my-awesome-dataset");
            then.status(200).json_body(json!({
                "accessLevel": "READ",
                "created": "2016-07-13T23:38:44.026Z",
                "id": "my-awesome-dataset",
                "isProject": false,
                "owner": "jonloyens",
                "status": "LOADED",
                "title": "My Awesome Dataset",
                "updated": "2018-03-29T17:46:57.502Z",
                "version": "some.version.identifier",
                "visibility": "OPEN"
            }));
        });

        // Act
        let summary = retrieve(&client, "jonloyens", "my-awesome-dataset").unwrap();

        // Assert
        assert_eq!(summary.owner, "jonloyens");
        assert_eq!(summary.status, "LOADED");
        mock.assert();
    }

    #[test]
    fn test_update_patches_only_the_given_fields() {
        // Arrange
        let server = MockServer::start();
        let client = test_client(&server);
        let mock = server.mock(|when, then| {
            when.method(PATCH)
                .path("/v0/datasets/jonloyens/my-awesome-dataset")
                .json_body(json!({"tags": ["updated"]}));
            then.status(200)
                .json_body(json!({"message": "Dataset updated successfully."}));
        });

        let body = DatasetUpdateRequest {
            tags: Some(vec!["updated".to_string()]),
            ..Default::default()
        };

        // Act
        let response = update(&client, "jonloyens", "my-awesome-dataset", &body).unwrap();

        // Assert
        assert_eq!(
            response.message.as_deref(),
            Some("Dataset updated successfully.")
        );
        mock.assert();
    }
}
