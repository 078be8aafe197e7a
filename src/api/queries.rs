use std::path::Path;

use reqwest::blocking::Response;
use reqwest::Method;

use crate::client::{save_to_file, Client};
use crate::error::Result;
use crate::models::{
    QueryCreateRequest, QuerySummaryResponse, QueryUpdateRequest, SavedQueryExecutionRequest,
    SparqlQueryRequest, SqlQueryRequest, SuccessResponse,
};
use crate::request::{Endpoint, NO_BODY};

/// Creates a saved query in a dataset.
pub fn create_in_dataset(
    client: &Client,
    owner: &str,
    datasetid: &str,
    body: &QueryCreateRequest,
) -> Result<QuerySummaryResponse> {
    let endpoint = Endpoint::new(Method::POST, format!("/datasets/{}/{}/queries", owner, datasetid));
    client.perform(&endpoint, Some(body))
}

/// Creates a saved query in a project.
pub fn create_in_project(
    client: &Client,
    owner: &str,
    projectid: &str,
    body: &QueryCreateRequest,
) -> Result<QuerySummaryResponse> {
    let endpoint = Endpoint::new(Method::POST, format!("/projects/{}/{}/queries", owner, projectid));
    client.perform(&endpoint, Some(body))
}

/// Deletes a saved query from a dataset.
pub fn delete_in_dataset(
    client: &Client,
    owner: &str,
    datasetid: &str,
    queryid: &str,
) -> Result<SuccessResponse> {
    let endpoint = Endpoint::new(
        Method::DELETE,
        format!("/datasets/{}/{}/queries/{}", owner, datasetid, queryid),
    );
    client.perform(&endpoint, NO_BODY)
}

/// Deletes a saved query from a project.
pub fn delete_in_project(
    client: &Client,
    owner: &str,
    projectid: &str,
    queryid: &str,
) -> Result<SuccessResponse> {
    let endpoint = Endpoint::new(
        Method::DELETE,
        format!("/projects/{}/{}/queries/{}", owner, projectid, queryid),
    );
    client.perform(&endpoint, NO_BODY)
}

/// Updates a saved query in a dataset.
pub fn update_in_dataset(
    client: &Client,
    owner: &str,
    datasetid: &str,
    queryid: &str,
    body: &QueryUpdateRequest,
) -> Result<QuerySummaryResponse> {
    let endpoint = Endpoint::new(
        Method::PUT,
        format!("/datasets/{}/{}/queries/{}", owner, datasetid, queryid),
    );
    client.perform(&endpoint, Some(body))
}

/// Updates a saved query in a project.
pub fn update_in_project(
    client: &Client,
    owner: &str,
    projectid: &str,
    queryid: &str,
    body: &QueryUpdateRequest,
) -> Result<QuerySummaryResponse> {
    let endpoint = Endpoint::new(
        Method::PUT,
        format!("/projects/{}/{}/queries/{}", owner, projectid, queryid),
    );
    client.perform(&endpoint, Some(body))
}

/// Fetches a saved query definition.
///
/// The definition is returned, not the query results. Use
/// [`execute_saved`] to run the query.
pub fn retrieve(client: &Client, queryid: &str) -> Result<QuerySummaryResponse> {
    let endpoint = Endpoint::new(Method::GET, format!("/queries/{}", queryid));
    client.perform(&endpoint, NO_BODY)
}

/// Fetches a specific version of a saved query definition.
pub fn retrieve_version(
    client: &Client,
    queryid: &str,
    versionid: &str,
) -> Result<QuerySummaryResponse> {
    let endpoint = Endpoint::new(Method::GET, format!("/queries/{}/v/{}", queryid, versionid));
    client.perform(&endpoint, NO_BODY)
}

/// Runs a saved query against the dataset or project it belongs to.
///
/// Results come back in the representation named by `accept`, e.g.
/// `text/csv` or `application/json`. The returned [`Response`] is an open
/// stream; read it to completion or drop it to release the connection.
pub fn execute_saved(
    client: &Client,
    queryid: &str,
    accept: &str,
    body: &SavedQueryExecutionRequest,
) -> Result<Response> {
    let endpoint =
        Endpoint::new(Method::POST, format!("/queries/{}/results", queryid)).accept(accept);
    client.perform_raw(&endpoint, Some(body))
}

/// Runs a saved query and writes the results to `path`.
pub fn execute_saved_and_save(
    client: &Client,
    queryid: &str,
    accept: &str,
    path: impl AsRef<Path>,
    body: &SavedQueryExecutionRequest,
) -> Result<SuccessResponse> {
    let path = path.as_ref();
    let response = execute_saved(client, queryid, accept, body)?;
    save_to_file(path, response)?;

    Ok(SuccessResponse {
        message: Some(format!("Results saved to {}", path.display())),
    })
}

/// Runs a SPARQL query against a dataset or project.
///
/// Results come back in the representation named by `accept`. The
/// returned [`Response`] is an open stream; read it to completion or drop
/// it to release the connection.
pub fn execute_sparql(
    client: &Client,
    owner: &str,
    id: &str,
    accept: &str,
    body: &SparqlQueryRequest,
) -> Result<Response> {
    let endpoint = Endpoint::new(Method::POST, format!("/sparql/{}/{}", owner, id)).accept(accept);
    client.perform_raw(&endpoint, Some(body))
}

/// Runs a SPARQL query and writes the results to `path`.
pub fn execute_sparql_and_save(
    client: &Client,
    owner: &str,
    id: &str,
    accept: &str,
    path: impl AsRef<Path>,
    body: &SparqlQueryRequest,
) -> Result<SuccessResponse> {
    let path = path.as_ref();
    let response = execute_sparql(client, owner, id, accept, body)?;
    save_to_file(path, response)?;

    Ok(SuccessResponse {
        message: Some(format!("Results saved to {}", path.display())),
    })
}

/// Runs a SQL query against a dataset or project.
///
/// Results come back in the representation named by `accept`. The
/// returned [`Response`] is an open stream; read it to completion or drop
/// it to release the connection.
pub fn execute_sql(
    client: &Client,
    owner: &str,
    id: &str,
    accept: &str,
    body: &SqlQueryRequest,
) -> Result<Response> {
    let endpoint = Endpoint::new(Method::POST, format!("/sql/{}/{}", owner, id)).accept(accept);
    client.perform_raw(&endpoint, Some(body))
}

/// Runs a SQL query and writes the results to `path`.
pub fn execute_sql_and_save(
    client: &Client,
    owner: &str,
    id: &str,
    accept: &str,
    path: impl AsRef<Path>,
    body: &SqlQueryRequest,
) -> Result<SuccessResponse> {
    let path = path.as_ref();
    let response = execute_sql(client, owner, id, accept, body)?;
    save_to_file(path, response)?;

    Ok(SuccessResponse {
        message: Some(format!("Results saved to {}", path.display())),
    })
}

/// Lists every saved query associated with a dataset, walking the listing
/// page by page.
pub fn list_for_dataset(
    client: &Client,
    owner: &str,
    datasetid: &str,
) -> Result<Vec<QuerySummaryResponse>> {
    client.list_all(&format!("/datasets/{}/{}/queries", owner, datasetid))
}

/// Lists every saved query associated with a project, walking the listing
/// page by page.
pub fn list_for_project(
    client: &Client,
    owner: &str,
    projectid: &str,
) -> Result<Vec<QuerySummaryResponse>> {
    client.list_all(&format!("/projects/{}/{}/queries", owner, projectid))
}
