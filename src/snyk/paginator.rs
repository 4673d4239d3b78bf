use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{Error, Result};

/// One page of a REST collection. Every list endpoint shares this
/// envelope: a `data` array plus an optional `links.next` path with the
/// follow-up query parameters already encoded by the server.
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    pub links: Option<PageLinks>,
}

#[derive(Debug, Deserialize)]
pub struct PageLinks {
    pub next: Option<String>,
}

impl<T> Page<T> {
    /// Absolute URL of the next page, if the server advertised one. An
    /// empty `next` string counts as the end of the collection.
    pub fn next_url(&self, base_url: &str) -> Option<String> {
        let next = self.links.as_ref()?.next.as_deref()?;
        if next.is_empty() {
            None
        } else if next.starts_with("http") {
            Some(next.to_string())
        } else {
            Some(format!("{}{}", base_url, next))
        }
    }
}

pub struct Paginator<'a> {
    client: &'a Client,
    base_url: &'a str,
}

impl<'a> Paginator<'a> {
    pub fn new(client: &'a Client, base_url: &'a str) -> Self {
        Self { client, base_url }
    }

    /// Collect every entity of a paginated collection. Query parameters
    /// go on the first request only; later requests follow the server's
    /// `links.next` verbatim. A failed page logs the cause and yields
    /// whatever was collected up to that point.
    pub async fn fetch_all<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Vec<T> {
        let mut collected = Vec::new();
        if let Err(e) = self.fetch_pages(path, params, &mut collected).await {
            tracing::warn!("Pagination aborted for {}: {}", path, e);
        }
        collected
    }

    async fn fetch_pages<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
        collected: &mut Vec<T>,
    ) -> Result<()> {
        let first = format!("{}{}", self.base_url, path);
        let mut request = self.client.get(&first).query(params);

        loop {
            let response = request.send().await?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return Err(Error::SnykApi(format!(
                    "Failed to fetch page of {}: {} - {}",
                    path, status, body
                )));
            }

            let page: Page<T> = response.json().await?;
            let next = page.next_url(self.base_url);
            tracing::debug!("Fetched page with {} entities from {}", page.data.len(), path);
            collected.extend(page.data);

            match next {
                Some(url) => request = self.client.get(url),
                None => return Ok(()),
            }
        }
    }
}
