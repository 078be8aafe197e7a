use reqwest::Method;

use crate::client::Client;
use crate::error::Result;
use crate::models::{DatasetSummaryResponse, ProjectSummaryResponse, UserInfoResponse};
use crate::request::{Endpoint, NO_BODY};

/// Fetches the profile of the authenticated user.
pub fn me(client: &Client) -> Result<UserInfoResponse> {
    let endpoint = Endpoint::new(Method::GET, "/user");
    client.perform(&endpoint, NO_BODY)
}

/// Fetches the profile of another user or organization.
pub fn retrieve(client: &Client, agentid: &str) -> Result<UserInfoResponse> {
    let endpoint = Endpoint::new(Method::GET, format!("/users/{}", agentid));
    client.perform(&endpoint, NO_BODY)
}

/// Lists the datasets the authenticated user contributes to, walking the
/// listing page by page.
pub fn datasets_contributing(client: &Client) -> Result<Vec<DatasetSummaryResponse>> {
    client.list_all("/user/datasets/contributing")
}

/// Lists the datasets the authenticated user has liked.
pub fn datasets_liked(client: &Client) -> Result<Vec<DatasetSummaryResponse>> {
    client.list_all("/user/datasets/liked")
}

/// Lists the datasets the authenticated user owns.
pub fn datasets_owned(client: &Client) -> Result<Vec<DatasetSummaryResponse>> {
    client.list_all("/user/datasets/own")
}

/// Lists the projects the authenticated user contributes to.
pub fn projects_contributing(client: &Client) -> Result<Vec<ProjectSummaryResponse>> {
    client.list_all("/user/projects/contributing")
}

/// Lists the projects the authenticated user has liked.
pub fn projects_liked(client: &Client) -> Result<Vec<ProjectSummaryResponse>> {
    client.list_all("/user/projects/liked")
}

/// Lists the projects the authenticated user owns.
pub fn projects_owned(client: &Client) -> Result<Vec<ProjectSummaryResponse>> {
    client.list_all("/user/projects/own")
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::test_utils::test_client;

    #[test]
    fn test_me_fetches_the_authenticated_profile() {
        // Arrange
        let server = MockServer::start();
        let client = test_client(&server);
        let mock = server.mock(|when, then| {
            when.method(GET).path("/v0/user");
            then.status(200).json_body(json!({
                "created": "2016-07-13T23:38:44.026Z",
                "displayName": "Jon Loyens",
                "id": "jonloyens",
                "updated": "2018-03-29T17:46:57.502Z"
            }));
        });

        // Act
        let user = me(&client).unwrap();

        // Assert
        assert_eq!(user.id, "jonloyens");
        assert_eq!(user.display_name.as_deref(), Some("Jon Loyens"));
        mock.assert();
    }

    #[test]
    fn test_datasets_owned_walks_the_listing() {
        // Arrange
        let server = MockServer::start();
        let client = test_client(&server);
        let summary = |id: &str| {
            json!({
                "accessLevel": "ADMIN",
                "created": "2016-07-13T23:38:44.026Z",
                "id": id,
                "isProject": false,
                "owner": "jonloyens",
                "status": "LOADED",
                "title": id,
                "updated": "2018-03-29T17:46:57.502Z",
                "version": "some.version.identifier",
                "visibility": "OPEN"
            })
        };
        let mock = server.mock(|when, then| {
            when.method(GET).path("/v0/user/datasets/own");
            then.status(200).json_body(json!({
                "count": 2,
                "records": [summary("first-dataset"), summary("second-dataset")]
            }));
        });

        // Act
        let datasets = datasets_owned(&client).unwrap();

        // Assert
        assert_eq!(datasets.len(), 2);
        assert_eq!(datasets[0].id, "first-dataset");
        assert_eq!(datasets[1].id, "second-dataset");
        mock.assert();
    }
}
