//! Webhook subscriptions tied to the authenticated user.

use reqwest::Method;

use crate::client::Client;
use crate::error::Result;
use crate::models::{Subscription, SubscriptionCreateRequest, SuccessResponse};
use crate::request::{Endpoint, NO_BODY};

/// Lists every webhook subscription held by the authenticated user,
/// walking the listing page by page.
pub fn list(client: &Client) -> Result<Vec<Subscription>> {
    client.list_all("/user/webhooks")
}

/// Fetches the authenticated user's subscription to an organization or
/// user account.
pub fn retrieve_account_subscription(client: &Client, user: &str) -> Result<Subscription> {
    let endpoint = Endpoint::new(Method::GET, format!("/user/webhooks/users/{}", user));
    client.perform(&endpoint, NO_BODY)
}

/// Fetches the authenticated user's subscription to a dataset.
pub fn retrieve_dataset_subscription(
    client: &Client,
    owner: &str,
    datasetid: &str,
) -> Result<Subscription> {
    let endpoint = Endpoint::new(
        Method::GET,
        format!("/user/webhooks/datasets/{}/{}", owner, datasetid),
    );
    client.perform(&endpoint, NO_BODY)
}

/// Fetches the authenticated user's subscription to a project.
pub fn retrieve_project_subscription(
    client: &Client,
    owner: &str,
    projectid: &str,
) -> Result<Subscription> {
    let endpoint = Endpoint::new(
        Method::GET,
        format!("/user/webhooks/projects/{}/{}", owner, projectid),
    );
    client.perform(&endpoint, NO_BODY)
}

/// Subscribes the authenticated user to events on an organization or user
/// account.
pub fn subscribe_to_account(
    client: &Client,
    user: &str,
    body: &SubscriptionCreateRequest,
) -> Result<SuccessResponse> {
    let endpoint = Endpoint::new(Method::PUT, format!("/user/webhooks/users/{}", user));
    client.perform(&endpoint, Some(body))
}

/// Subscribes the authenticated user to events on a dataset.
pub fn subscribe_to_dataset(
    client: &Client,
    owner: &str,
    datasetid: &str,
    body: &SubscriptionCreateRequest,
) -> Result<SuccessResponse> {
    let endpoint = Endpoint::new(
        Method::PUT,
        format!("/user/webhooks/datasets/{}/{}", owner, datasetid),
    );
    client.perform(&endpoint, Some(body))
}

/// Subscribes the authenticated user to events on a project.
pub fn subscribe_to_project(
    client: &Client,
    owner: &str,
    projectid: &str,
    body: &SubscriptionCreateRequest,
) -> Result<SuccessResponse> {
    let endpoint = Endpoint::new(
        Method::PUT,
        format!("/user/webhooks/projects/{}/{}", owner, projectid),
    );
    client.perform(&endpoint, Some(body))
}

/// Removes the authenticated user's subscription to an organization or
/// user account.
pub fn unsubscribe_from_account(client: &Client, user: &str) -> Result<SuccessResponse> {
    let endpoint = Endpoint::new(Method::DELETE, format!("/user/webhooks/users/{}", user));
    client.perform(&endpoint, NO_BODY)
}

/// Removes the authenticated user's subscription to a dataset.
pub fn unsubscribe_from_dataset(
    client: &Client,
    owner: &str,
    datasetid: &str,
) -> Result<SuccessResponse> {
    let endpoint = Endpoint::new(
        Method::DELETE,
        format!("/user/webhooks/datasets/{}/{}", owner, datasetid),
    );
    client.perform(&endpoint, NO_BODY)
}

/// Removes the authenticated user's subscription to a project.
pub fn unsubscribe_from_project(
    client: &Client,
    owner: &str,
    projectid: &str,
) -> Result<SuccessResponse> {
    let endpoint = Endpoint::new(
        Method::DELETE,
        format!("/user/webhooks/projects/{}/{}", owner, projectid),
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
    fn test_subscribe_to_dataset_puts_the_requested_events() {
        // Arrange
        let server = MockServer::start();
        let client = test_client(&server);
        let mock = server.mock(|when, then| {
            when.method(PUT)
                .path("/v0/user/webhooks/datasets/jonloyens/my-awesome-dataset")
                .json_body(json!({"events": ["ALL"]}));
            then.status(200)
                .json_body(json!({"message": "Subscription created successfully."}));
        });

        let body = SubscriptionCreateRequest {
            events: vec!["ALL".to_string()],
        };

        // Act
        let response =
            subscribe_to_dataset(&client, "jonloyens", "my-awesome-dataset", &body).unwrap();

        // Assert
        assert_eq!(
            response.message.as_deref(),
            Some("Subscription created successfully.")
        );
        mock.assert();
    }

    #[test]
    fn test_retrieve_dataset_subscription_decodes_the_reply() {
        // Arrange
        let server = MockServer::start();
        let client = test_client(&server);
        let mock = server.mock(|when, then| {
            when.method(GET).path("/v0/user/webhooks/datasets/jonloyens/my-awesome-dataset");
            then.status(200).json_body(json!({
                "dataset": {"id": "my-awesome-dataset", "owner": "jonloyens"},
                "events": ["ALL"]
            }));
        });

        // Act
        let subscription =
            retrieve_dataset_subscription(&client, "jonloyens", "my-awesome-dataset").unwrap();

        // Assert
        assert_eq!(subscription.events, vec!["ALL".to_string()]);
        let dataset = subscription.dataset.unwrap();
        assert_eq!(dataset.owner, "jonloyens");
        mock.assert();
    }
}
