use reqwest::Method;

use crate::client::Client;
use crate::error::Result;
use crate::models::{
    ProjectCreateOrUpdateRequest, ProjectCreateResponse, ProjectSummaryResponse, SuccessResponse,
};
use crate::request::{Endpoint, NO_BODY};

/// Creates a project under the owning account.
pub fn create(
    client: &Client,
    owner: &str,
    body: &ProjectCreateOrUpdateRequest,
) -> Result<ProjectCreateResponse> {
    let endpoint = Endpoint::new(Method::POST, format!("/projects/{}", owner));
    client.perform(&endpoint, Some(body))
}

/// Creates a project with the given id, resetting it if it already exists
/// and redefining all of its attributes.
pub fn create_or_replace(
    client: &Client,
    owner: &str,
    projectid: &str,
    body: &ProjectCreateOrUpdateRequest,
) -> Result<SuccessResponse> {
    let endpoint = Endpoint::new(Method::PUT, format!("/projects/{}/{}", owner, projectid));
    client.perform(&endpoint, Some(body))
}

/// Fetches a project definition.
pub fn retrieve(client: &Client, owner: &str, projectid: &str) -> Result<ProjectSummaryResponse> {
    let endpoint = Endpoint::new(Method::GET, format!("/projects/{}/{}", owner, projectid));
    client.perform(&endpoint, NO_BODY)
}

/// Fetches a specific version of a project definition.
pub fn retrieve_version(
    client: &Client,
    owner: &str,
    projectid: &str,
    versionid: &str,
) -> Result<ProjectSummaryResponse> {
    let endpoint = Endpoint::new(
        Method::GET,
        format!("/projects/{}/{}/v/{}", owner, projectid, versionid),
    );
    client.perform(&endpoint, NO_BODY)
}

/// Updates selected attributes of a project.
pub fn update(
    client: &Client,
    owner: &str,
    projectid: &str,
    body: &ProjectCreateOrUpdateRequest,
) -> Result<SuccessResponse> {
    let endpoint = Endpoint::new(Method::PATCH, format!("/projects/{}/{}", owner, projectid));
    client.perform(&endpoint, Some(body))
}

/// Deletes a project and all associated data.
pub fn delete(client: &Client, owner: &str, projectid: &str) -> Result<SuccessResponse> {
    let endpoint = Endpoint::new(Method::DELETE, format!("/projects/{}/{}", owner, projectid));
    client.perform(&endpoint, NO_BODY)
}

/// Links a dataset to a project so its files become addressable from the
/// project workspace.
pub fn link_dataset(
    client: &Client,
    owner: &str,
    projectid: &str,
    dataset_owner: &str,
    datasetid: &str,
) -> Result<SuccessResponse> {
    let endpoint = Endpoint::new(
        Method::PUT,
        format!(
            "/projects/{}/{}/linkedDatasets/{}/{}",
            owner, projectid, dataset_owner, datasetid
        ),
    );
    client.perform(&endpoint, NO_BODY)
}

/// Removes a linked dataset from a project.
pub fn unlink_dataset(
    client: &Client,
    owner: &str,
    projectid: &str,
    dataset_owner: &str,
    datasetid: &str,
) -> Result<SuccessResponse> {
    let endpoint = Endpoint::new(
        Method::DELETE,
        format!(
            "/projects/{}/{}/linkedDatasets/{}/{}",
            owner, projectid, dataset_owner, datasetid
        ),
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
    fn test_retrieve_decodes_the_summary() {
        // Arrange
        let server = MockServer::start();
        let client = test_client(&server);
        let mock = server.mock(|when, then| {
            when.method(GET).path("/v0/projects/jonloyens/an-example-project");
            then.status(200).json_body(json!({
                "accessLevel": "READ",
                "created": "2016-07-13T23:38:44.026Z",
                "id": "an-example-project",
                "owner": "jonloyens",
                "status": "LOADED",
                "title": "An Example Project",
                "updated": "2018-03-29T17:46:57.502Z",
                "version": "some.version.identifier",
                "visibility": "OPEN",
                "linkedDatasets": [{
                    "accessLevel": "READ",
                    "created": "2016-07-13T23:38:44.026Z",
                    "id": "my-awesome-dataset",
                    "owner": "jonloyens",
                    "title": "My Awesome Dataset",
                    "updated": "2018-03-29T17:46:57.502Z",
                    "version": "some.version.identifier",
                    "visibility": "OPEN"
                }]
            }));
        });

        // Act
        let summary = retrieve(&client, "jonloyens", "an-example-project").unwrap();

        // Assert
        assert_eq!(summary.id, "an-example-project");
        let linked = summary.linked_datasets.unwrap();
        assert_eq!(linked.len(), 1);
        assert_eq!(linked[0].id, "my-awesome-dataset");
        mock.assert();
    }

    #[test]
    fn test_link_dataset_puts_to_the_linked_datasets_collection() {
        // Arrange
        let server = MockServer::start();
        let client = test_client(&server);
        let mock = server.mock(|when, then| {
            when.method(PUT).path(
                "/v0/projects/jonloyens/an-example-project/linkedDatasets/jonloyens/my-awesome-dataset",
            );
            then.status(200)
                .json_body(json!({"message": "Dataset linked successfully."}));
        });

        // Act
        let response = link_dataset(
            &client,
            "jonloyens",
            "an-example-project",
            "jonloyens",
            "my-awesome-dataset",
        )
        .unwrap();

        // Assert
        assert_eq!(
            response.message.as_deref(),
            Some("Dataset linked successfully.")
        );
        mock.assert();
    }
}
