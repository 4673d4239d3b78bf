use async_trait::async_trait;
use reqwest::{header, Client};

use crate::error::{Error, Result};
use crate::models::{GroupResource, OrgResource, ProjectResource, RawIgnoreSet};
use crate::snyk::paginator::{Page, Paginator};
use crate::snyk::source::IgnoreSource;

/// REST API version pinned for every `/rest` call.
const REST_VERSION: &str = "2024-10-15";

pub struct SnykClient {
    client: Client,
    base_url: String,
    page_limit: u32,
}

impl SnykClient {
    pub fn new(token: &str, base_url: &str, page_limit: u32) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("token {}", token))?,
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/vnd.api+json"),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            page_limit,
        })
    }

    /// Groups visible to the token. Single page; used to pick a
    /// `--group-id` scope before a full traversal.
    pub async fn groups(&self) -> Vec<GroupResource> {
        match self.fetch_groups().await {
            Ok(groups) => {
                tracing::info!("Found {} groups", groups.len());
                groups
            }
            Err(e) => {
                tracing::warn!("Error fetching groups: {}", e);
                Vec::new()
            }
        }
    }

    async fn fetch_groups(&self) -> Result<Vec<GroupResource>> {
        let url = format!("{}/rest/groups", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("version", REST_VERSION)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::SnykApi(format!(
                "Failed to fetch groups: {} - {}",
                status, body
            )));
        }

        let page: Page<GroupResource> = response.json().await?;
        Ok(page.data)
    }

    async fn fetch_ignores(&self, org_id: &str, project_id: &str) -> Result<RawIgnoreSet> {
        let url = format!(
            "{}/v1/org/{}/project/{}/ignores",
            self.base_url, org_id, project_id
        );
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::SnykApi(format!(
                "Failed to fetch ignores for project {}: {} - {}",
                project_id, status, body
            )));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl IgnoreSource for SnykClient {
    async fn organizations(&self, group_id: Option<&str>) -> Vec<OrgResource> {
        let limit = self.page_limit.to_string();
        let mut params = vec![("version", REST_VERSION), ("limit", limit.as_str())];
        if let Some(group_id) = group_id {
            params.push(("group_id", group_id));
            tracing::info!("Fetching organizations for group: {}", group_id);
        }

        let paginator = Paginator::new(&self.client, &self.base_url);
        let orgs: Vec<OrgResource> = paginator.fetch_all("/rest/orgs", &params).await;
        tracing::info!("Found {} organizations across all pages", orgs.len());
        orgs
    }

    async fn projects(&self, org_id: &str) -> Vec<ProjectResource> {
        let limit = self.page_limit.to_string();
        let params = [("version", REST_VERSION), ("limit", limit.as_str())];
        let path = format!("/rest/orgs/{}/projects", org_id);

        let paginator = Paginator::new(&self.client, &self.base_url);
        let projects: Vec<ProjectResource> = paginator.fetch_all(&path, &params).await;
        tracing::info!("Found {} projects in org {}", projects.len(), org_id);
        projects
    }

    async fn project_ignores(&self, org_id: &str, project_id: &str) -> RawIgnoreSet {
        match self.fetch_ignores(org_id, project_id).await {
            Ok(ignores) => {
                tracing::debug!("Retrieved ignores for project {}", project_id);
                ignores
            }
            Err(e) => {
                tracing::warn!(
                    "Error fetching ignores for project {} in org {}: {}",
                    project_id,
                    org_id,
                    e
                );
                RawIgnoreSet::new()
            }
        }
    }
}
