use std::fs::File;
use std::io::Read;
use std::path::Path;

use reqwest::blocking::{Body, Response};
use reqwest::Method;

use crate::client::{save_to_file, Client};
use crate::error::Result;
use crate::models::{FileCreateRequest, SuccessResponse};
use crate::request::{decode_response, Endpoint, NO_BODY};

/// Adds files published on the web to a dataset via their URLs.
///
/// The source URL is stored with each file, so the dataset can be
/// refreshed anytime the upstream data changes with [`sync`].
pub fn add_from_urls(
    client: &Client,
    owner: &str,
    datasetid: &str,
    files: &[FileCreateRequest],
) -> Result<SuccessResponse> {
    let endpoint = Endpoint::new(Method::POST, format!("/datasets/{}/{}/files", owner, datasetid));
    client.perform(&endpoint, Some(files))
}

/// Deletes a single file from a dataset.
pub fn delete(
    client: &Client,
    owner: &str,
    datasetid: &str,
    filename: &str,
) -> Result<SuccessResponse> {
    let endpoint = Endpoint::new(
        Method::DELETE,
        format!("/datasets/{}/{}/files/{}", owner, datasetid, filename),
    );
    client.perform(&endpoint, NO_BODY)
}

/// Downloads a file within a dataset as originally uploaded.
///
/// The returned [`Response`] is an open stream; read it to completion or
/// drop it to release the connection. Prefer
/// [`queries::execute_sql`](crate::api::queries::execute_sql) for clean
/// and structured data.
pub fn download(client: &Client, owner: &str, datasetid: &str, filename: &str) -> Result<Response> {
    let endpoint = Endpoint::new(
        Method::GET,
        format!("/file_download/{}/{}/{}", owner, datasetid, filename),
    );
    client.perform_raw(&endpoint, NO_BODY)
}

/// Downloads a file within a dataset as originally uploaded and writes it
/// to `path`.
pub fn download_and_save(
    client: &Client,
    owner: &str,
    datasetid: &str,
    filename: &str,
    path: impl AsRef<Path>,
) -> Result<SuccessResponse> {
    let path = path.as_ref();
    let response = download(client, owner, datasetid, filename)?;
    save_to_file(path, response)?;

    Ok(SuccessResponse {
        message: Some(format!("File saved to {}", path.display())),
    })
}

/// Downloads a .zip file containing every file within a dataset as
/// originally uploaded.
///
/// The returned [`Response`] is an open stream; read it to completion or
/// drop it to release the connection.
pub fn download_dataset(client: &Client, owner: &str, datasetid: &str) -> Result<Response> {
    let endpoint = Endpoint::new(Method::GET, format!("/download/{}/{}", owner, datasetid));
    client.perform_raw(&endpoint, NO_BODY)
}

/// Downloads a .zip file containing every file within a dataset and
/// writes it to `path`.
pub fn download_and_save_dataset(
    client: &Client,
    owner: &str,
    datasetid: &str,
    path: impl AsRef<Path>,
) -> Result<SuccessResponse> {
    let path = path.as_ref();
    let response = download_dataset(client, owner, datasetid)?;
    save_to_file(path, response)?;

    Ok(SuccessResponse {
        message: Some(format!("ZIP file saved to {}", path.display())),
    })
}

/// Tells the server to process the latest data available for files added
/// from URLs or via streams.
pub fn sync(client: &Client, owner: &str, datasetid: &str) -> Result<SuccessResponse> {
    let endpoint = Endpoint::new(Method::GET, format!("/datasets/{}/{}/sync", owner, datasetid));
    client.perform(&endpoint, NO_BODY)
}

/// Uploads the contents of a reader to a file in a dataset.
///
/// With `expand_archive` set, an uploaded .zip is unpacked server-side
/// into its member files.
pub fn upload_stream<R>(
    client: &Client,
    owner: &str,
    datasetid: &str,
    filename: &str,
    body: R,
    expand_archive: bool,
) -> Result<SuccessResponse>
where
    R: Read + Send + 'static,
{
    let mut path = format!("/uploads/{}/{}/files/{}", owner, datasetid, filename);
    if expand_archive {
        path.push_str("?expandArchive=true");
    }

    let endpoint = Endpoint::new(Method::PUT, path).content_type("application/octet-stream");
    let response = client.stream_request(&endpoint, Body::new(body))?;
    decode_response(response)
}

/// Uploads one local file to a dataset.
pub fn upload(
    client: &Client,
    owner: &str,
    datasetid: &str,
    filename: &str,
    path: impl AsRef<Path>,
    expand_archive: bool,
) -> Result<SuccessResponse> {
    let file = File::open(path)?;
    upload_stream(client, owner, datasetid, filename, file, expand_archive)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Cursor;

    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::models::FileSourceCreateOrUpdateRequest;
    use crate::test_utils::test_client;

    #[test]
    fn test_add_from_urls_posts_the_file_list() {
        // Arrange
        let server = MockServer::start();
        let client = test_client(&server);
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v0/datasets/jonloyens/my-awesome-dataset/files")
                .json_body(json!([{
                    "name": "atx-startup-league-rosters.csv",
                    "source": {"url": "https://example.com/rosters.csv"}
                }]));
            then.status(200)
                .json_body(json!({"message": "Dataset updated successfully."}));
        });

        let files = [FileCreateRequest {
            name: "atx-startup-league-rosters.csv".to_string(),
            source: FileSourceCreateOrUpdateRequest {
                url: Some("https://example.com/rosters.csv".to_string()),
                ..Default::default()
            },
            ..Default::default()
        }];

        // Act
        let response = add_from_urls(&client, "jonloyens", "my-awesome-dataset", &files).unwrap();

        // Assert
        assert_eq!(
            response.message.as_deref(),
            Some("Dataset updated successfully.")
        );
        mock.assert();
    }

    #[test]
    fn test_upload_stream_sends_raw_bytes() {
        // Arrange
        let server = MockServer::start();
        let client = test_client(&server);
        let mock = server.mock(|when, then| {
            when.method(PUT)
                .path("/v0/uploads/jonloyens/my-awesome-dataset/files/rosters.csv")
                .query_param("expandArchive", "true")
                .header("content-type", "application/octet-stream")
                .body("name,team\nalice,unicorns\n");
            then.status(200)
                .json_body(json!({"message": "File uploaded."}));
        });

        let body = Cursor::new("name,team\nalice,unicorns\n");

        // Act
        let response = upload_stream(
            &client,
            "jonloyens",
            "my-awesome-dataset",
            "rosters.csv",
            body,
            true,
        )
        .unwrap();

        // Assert
        assert_eq!(response.message.as_deref(), Some("File uploaded."));
        mock.assert();
    }

    #[test]
    fn test_download_and_save_writes_the_payload_to_disk() {
        // Arrange
        let server = MockServer::start();
        let client = test_client(&server);
        server.mock(|when, then| {
            when.method(GET)
                .path("/v0/file_download/jonloyens/my-awesome-dataset/rosters.csv");
            then.status(200).body("name,team\nalice,unicorns\n");
        });

        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("rosters.csv");

        // Act
        let response = download_and_save(
            &client,
            "jonloyens",
            "my-awesome-dataset",
            "rosters.csv",
            &target,
        )
        .unwrap();

        // Assert
        assert_eq!(
            response.message,
            Some(format!("File saved to {}", target.display()))
        );
        assert_eq!(
            fs::read_to_string(&target).unwrap(),
            "name,team\nalice,unicorns\n"
        );
    }

    #[test]
    fn test_upload_reads_a_local_file() {
        // Arrange
        let server = MockServer::start();
        let client = test_client(&server);
        let mock = server.mock(|when, then| {
            when.method(PUT)
                .path("/v0/uploads/jonloyens/my-awesome-dataset/files/notes.txt")
                .body("hello from disk");
            then.status(200).json_body(json!({"message": "File uploaded."}));
        });

        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("notes.txt");
        fs::write(&source, "hello from disk").unwrap();

        // Act
        let response = upload(
            &client,
            "jonloyens",
            "my-awesome-dataset",
            "notes.txt",
            &source,
            false,
        )
        .unwrap();

        // Assert
        assert_eq!(response.message.as_deref(), Some("File uploaded."));
        mock.assert();
    }
}
