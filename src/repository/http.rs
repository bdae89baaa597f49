//! HTTP implementation of the catalog repository.
//!
//! Wraps the backend search API (`/api/search`, `/api/categories`,
//! `/api/organizations`) using [`reqwest`].

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::domain::record::{Category, Record};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CatalogReader, RecordSearchQuery};

/// HTTP client for a single catalog backend instance.
#[derive(Clone)]
pub struct HttpCatalogRepository {
    client: reqwest::Client,
    base_url: String,
}

/// Envelope returned by the backend `/api/search` endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    records: Vec<Record>,
    total_count: usize,
}

impl HttpCatalogRepository {
    /// Creates a new repository for the given base URL, e.g.
    /// `http://localhost:3001`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Creates a repository reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    async fn get_json<T>(&self, path: &str, params: &[(&str, String)]) -> RepositoryResult<T>
    where
        T: DeserializeOwned,
    {
        let mut request = self.client.get(format!("{}{path}", self.base_url));
        if !params.is_empty() {
            request = request.query(params);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RepositoryError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|err| RepositoryError::Deserialization(err.to_string()))
    }
}

impl CatalogReader for HttpCatalogRepository {
    async fn search(&self, query: &RecordSearchQuery) -> RepositoryResult<(usize, Vec<Record>)> {
        let filters = &query.filters;
        let page = query.pagination.as_ref().map_or(1, |p| p.page);

        // The backend expects every parameter to be present, empty when
        // unconstrained.
        let params = [
            ("q", filters.q.clone()),
            ("page", page.to_string()),
            ("organizations", filters.organizations_param()),
            ("author", filters.author.clone()),
            ("categoryIds", filters.category_ids_param()),
            ("dateFrom", filters.date_from.clone()),
            ("dateTo", filters.date_to.clone()),
            ("sortBy", filters.sort_by.clone()),
        ];

        let response: SearchResponse = self.get_json("/api/search", &params).await?;
        Ok((response.total_count, response.records))
    }

    async fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        self.get_json("/api/categories", &[]).await
    }

    async fn list_organizations(&self) -> RepositoryResult<Vec<String>> {
        self.get_json("/api/organizations", &[]).await
    }
}
