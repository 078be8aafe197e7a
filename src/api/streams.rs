use std::io::Read;

use reqwest::blocking::Body;
use reqwest::Method;

use crate::client::Client;
use crate::error::Result;
use crate::models::{StreamSchema, StreamSchemaUpdateRequest, SuccessResponse};
use crate::request::{Endpoint, NO_BODY};

/// Appends records to a stream, creating the stream if it does not exist
/// yet.
///
/// The reader supplies the records verbatim. Multiple records can be
/// appended at once by separating them with newlines, `application/json-l`
/// style. The server ingests appended records asynchronously, so a
/// successful append acknowledges receipt, not processing.
pub fn append<R>(
    client: &Client,
    owner: &str,
    datasetid: &str,
    streamid: &str,
    body: R,
) -> Result<SuccessResponse>
where
    R: Read + Send + 'static,
{
    let endpoint = Endpoint::new(
        Method::POST,
        format!("/streams/{}/{}/{}", owner, datasetid, streamid),
    )
    .content_type("application/json-l");

    // The reply body carries nothing useful; dropping it releases the
    // connection.
    client.stream_request(&endpoint, Body::new(body))?;

    Ok(SuccessResponse {
        message: Some("Accepted".to_string()),
    })
}

/// Deletes all records previously appended to a stream.
pub fn delete_records(
    client: &Client,
    owner: &str,
    datasetid: &str,
    streamid: &str,
) -> Result<SuccessResponse> {
    let endpoint = Endpoint::new(
        Method::DELETE,
        format!("/streams/{}/{}/{}/records", owner, datasetid, streamid),
    );
    client.perform(&endpoint, NO_BODY)
}

/// Fetches the schema of a stream.
pub fn retrieve_schema(
    client: &Client,
    owner: &str,
    datasetid: &str,
    streamid: &str,
) -> Result<StreamSchema> {
    let endpoint = Endpoint::new(
        Method::GET,
        format!("/streams/{}/{}/{}/schema", owner, datasetid, streamid),
    );
    client.perform(&endpoint, NO_BODY)
}

/// Sets or updates the schema of a stream.
pub fn set_or_update_schema(
    client: &Client,
    owner: &str,
    datasetid: &str,
    streamid: &str,
    body: &StreamSchemaUpdateRequest,
) -> Result<SuccessResponse> {
    let endpoint = Endpoint::new(
        Method::PATCH,
        format!("/streams/{}/{}/{}/schema", owner, datasetid, streamid),
    );
    client.perform(&endpoint, Some(body))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use httpmock::prelude::*;
    use httpmock::Method::PATCH;
    use serde_json::json;

    use super::*;
    use crate::test_utils::test_client;

    #[test]
    fn test_append_sends_records_verbatim() {
        // Arrange
        let server = MockServer::start();
        let client = test_client(&server);
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v0/streams/jonloyens/my-awesome-dataset/roster-changes")
                .header("content-type", "application/json-l")
                .body("{\"name\": \"alice\"}\n{\"name\": \"bob\"}\n");
            then.status(200);
        });

        let records = Cursor::new("{\"name\": \"alice\"}\n{\"name\": \"bob\"}\n");

        // Act
        let response = append(
            &client,
            "jonloyens",
            "my-awesome-dataset",
            "roster-changes",
            records,
        )
        .unwrap();

        // Assert
        assert_eq!(response.message.as_deref(), Some("Accepted"));
        mock.assert();
    }

    #[test]
    fn test_retrieve_schema_decodes_the_reply() {
        // Arrange
        let server = MockServer::start();
        let client = test_client(&server);
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v0/streams/jonloyens/my-awesome-dataset/roster-changes/schema");
            then.status(200).json_body(json!({
                "primaryKeyFields": ["name"],
                "sequenceField": "updated_at"
            }));
        });

        // Act
        let schema =
            retrieve_schema(&client, "jonloyens", "my-awesome-dataset", "roster-changes").unwrap();

        // Assert
        assert_eq!(schema.primary_key_fields, Some(vec!["name".to_string()]));
        assert_eq!(schema.sequence_field.as_deref(), Some("updated_at"));
        mock.assert();
    }

    #[test]
    fn test_set_or_update_schema_patches_the_schema_resource() {
        // Arrange
        let server = MockServer::start();
        let client = test_client(&server);
        let mock = server.mock(|when, then| {
            when.method(PATCH)
                .path("/v0/streams/jonloyens/my-awesome-dataset/roster-changes/schema")
                .json_body(json!({
                    "primaryKeyFields": ["name"],
                    "updateMethod": "TRUNCATED"
                }));
            then.status(200)
                .json_body(json!({"message": "Stream schema updated."}));
        });

        let body = StreamSchemaUpdateRequest {
            primary_key_fields: Some(vec!["name".to_string()]),
            sequence_field: None,
            update_method: "TRUNCATED".to_string(),
        };

        // Act
        let response = set_or_update_schema(
            &client,
            "jonloyens",
            "my-awesome-dataset",
            "roster-changes",
            &body,
        )
        .unwrap();

        // Assert
        assert_eq!(response.message.as_deref(), Some("Stream schema updated."));
        mock.assert();
    }
}
