//! Request and response bodies, one struct per wire shape.
//!
//! Optional fields are omitted from serialized output entirely rather
//! than sent as `null`, matching what the API expects.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetCreateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<FileCreateRequest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub title: String,
    pub visibility: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetCreateResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetOrProjectIdentifier {
    pub id: String,
    pub owner: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetReplaceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<FileCreateRequest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub title: String,
    pub visibility: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSummaryResponse {
    pub access_level: String,
    pub created: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dois: Option<Vec<DigitalObjectIdentifier>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<FileSummaryResponse>>,
    pub id: String,
    pub is_project: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    pub owner: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub title: String,
    pub updated: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_dois: Option<Vec<DigitalObjectIdentifier>>,
    pub visibility: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<FileCreateRequest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigitalObjectIdentifier {
    pub created: String,
    pub doi: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileCreateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    pub name: String,
    pub source: FileSourceCreateOrUpdateRequest,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSourceCreateOrUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<WebAuthorization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<WebCredentials>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expand_archive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth_token: Option<OauthTokenReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_entity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_headers: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSourceResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<WebAuthorization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<WebCredentials>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expand_archive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    pub sync_status: String,
    /// Serialized as `labels` on the wire.
    #[serde(rename = "labels", skip_serializing_if = "Option::is_none")]
    pub sync_summary: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_sync_failure: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_sync_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_sync_success: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth_token: Option<OauthTokenReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_entity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_headers: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSummaryResponse {
    pub created: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    pub name: String,
    /// The server reports sizes as strings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_in_bytes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<FileSourceResponse>,
    pub updated: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown_body: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightCreateRequest {
    pub body: InsightBody,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_links: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightCreateResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightReplaceRequest {
    pub body: InsightBody,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_links: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightSummaryResponse {
    pub author: String,
    pub body: InsightBody,
    pub created: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_links: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub title: String,
    pub updated: String,
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<InsightBody>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_links: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkedDatasetCreateOrUpdateRequest {
    pub id: String,
    pub owner: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedDatasetSummaryResponse {
    pub access_level: String,
    pub created: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    pub owner: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub title: String,
    pub updated: String,
    pub version: String,
    pub visibility: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OauthTokenReference {
    pub id: String,
    pub owner: String,
    pub site: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCreateOrUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<FileCreateRequest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_datasets: Option<Vec<LinkedDatasetCreateOrUpdateRequest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub title: String,
    pub visibility: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCreateResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummaryResponse {
    pub access_level: String,
    pub created: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<FileSummaryResponse>>,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_datasets: Option<Vec<LinkedDatasetSummaryResponse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
    pub owner: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub title: String,
    pub updated: String,
    pub version: String,
    pub visibility: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryCreateRequest {
    pub name: String,
    pub content: String,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryParameter {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuerySummaryResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<HashMap<String, QueryParameter>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryUpdateRequest {
    pub name: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedQueryExecutionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_table_schema: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rows: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparqlQueryRequest {
    pub query: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SqlQueryRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_table_schema: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamSchema {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_key_fields: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_field: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamSchemaUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_key_fields: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_field: Option<String>,
    pub update_method: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset: Option<DatasetOrProjectIdentifier>,
    pub events: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<DatasetOrProjectIdentifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserIdentifier>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionCreateRequest {
    pub events: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserIdentifier {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfoResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub created: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub id: String,
    pub updated: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebAuthorization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebCredentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub user: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_update_request_serializes_to_an_empty_document() {
        let body = DatasetUpdateRequest::default();

        let json = serde_json::to_string(&body).unwrap();

        assert_eq!(json, "{}");
    }

    #[test]
    fn dataset_summary_deserializes_a_typical_payload() {
        // Arrange
        let payload = json!({
            "accessLevel": "READ",
            "created": "2016-07-13T23:38:44.026Z",
            "id": "my-awesome-dataset",
            "isProject": false,
            "owner": "jonloyens",
            "status": "LOADED",
            "tags": ["first", "second"],
            "title": "My Awesome Dataset",
            "updated": "2018-03-29T17:46:57.502Z",
            "version": "some.version.identifier",
            "visibility": "OPEN"
        });

        // Act
        let summary: DatasetSummaryResponse = serde_json::from_value(payload).unwrap();

        // Assert
        assert_eq!(summary.id, "my-awesome-dataset");
        assert_eq!(summary.access_level, "READ");
        assert!(!summary.is_project);
        assert_eq!(summary.tags, Some(vec!["first".into(), "second".into()]));
        assert!(summary.description.is_none());
    }

    #[test]
    fn file_source_sync_summary_travels_under_the_labels_key() {
        let payload = json!({
            "syncStatus": "OK",
            "labels": ["clean"]
        });

        let source: FileSourceResponse = serde_json::from_value(payload).unwrap();

        assert_eq!(source.sync_status, "OK");
        assert_eq!(source.sync_summary, Some(vec!["clean".to_string()]));
    }

    #[test]
    fn web_authorization_kind_round_trips_as_type() {
        let authorization = WebAuthorization {
            credentials: None,
            kind: "BEARER".to_string(),
        };

        let json = serde_json::to_string(&authorization).unwrap();

        assert_eq!(json, r#"{"type":"BEARER"}"#);
    }
}
