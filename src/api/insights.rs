use reqwest::Method;

use crate::client::Client;
use crate::error::Result;
use crate::models::{
    InsightCreateRequest, InsightCreateResponse, InsightReplaceRequest, InsightSummaryResponse,
    InsightUpdateRequest, SuccessResponse,
};
use crate::request::{Endpoint, NO_BODY};

/// Creates an insight in a project.
pub fn create(
    client: &Client,
    owner: &str,
    projectid: &str,
    body: &InsightCreateRequest,
) -> Result<InsightCreateResponse> {
    let endpoint = Endpoint::new(Method::POST, format!("/insights/{}/{}", owner, projectid));
    client.perform(&endpoint, Some(body))
}

/// Lists every insight associated with a project, walking the listing
/// page by page.
pub fn list(client: &Client, owner: &str, projectid: &str) -> Result<Vec<InsightSummaryResponse>> {
    client.list_all(&format!("/insights/{}/{}", owner, projectid))
}

/// Fetches an insight.
pub fn retrieve(
    client: &Client,
    owner: &str,
    projectid: &str,
    insightid: &str,
) -> Result<InsightSummaryResponse> {
    let endpoint = Endpoint::new(
        Method::GET,
        format!("/insights/{}/{}/{}", owner, projectid, insightid),
    );
    client.perform(&endpoint, NO_BODY)
}

/// Fetches a specific version of an insight.
pub fn retrieve_version(
    client: &Client,
    owner: &str,
    projectid: &str,
    insightid: &str,
    versionid: &str,
) -> Result<InsightSummaryResponse> {
    let endpoint = Endpoint::new(
        Method::GET,
        format!("/insights/{}/{}/{}/v/{}", owner, projectid, insightid, versionid),
    );
    client.perform(&endpoint, NO_BODY)
}

/// Replaces an insight, redefining all of its attributes.
pub fn replace(
    client: &Client,
    owner: &str,
    projectid: &str,
    insightid: &str,
    body: &InsightReplaceRequest,
) -> Result<SuccessResponse> {
    let endpoint = Endpoint::new(
        Method::PUT,
        format!("/insights/{}/{}/{}", owner, projectid, insightid),
    );
    client.perform(&endpoint, Some(body))
}

/// Updates selected attributes of an insight. Omitted attributes remain
/// untouched.
pub fn update(
    client: &Client,
    owner: &str,
    projectid: &str,
    insightid: &str,
    body: &InsightUpdateRequest,
) -> Result<SuccessResponse> {
    let endpoint = Endpoint::new(
        Method::PATCH,
        format!("/insights/{}/{}/{}", owner, projectid, insightid),
    );
    client.perform(&endpoint, Some(body))
}

/// Deletes an insight.
pub fn delete(
    client: &Client,
    owner: &str,
    projectid: &str,
    insightid: &str,
) -> Result<SuccessResponse> {
    let endpoint = Endpoint::new(
        Method::DELETE,
        format!("/insights/{}/{}/{}", owner, projectid, insightid),
    );
    client.perform(&endpoint, NO_BODY)
}
