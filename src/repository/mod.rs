use crate::domain::filters::SearchFilters;
use crate::domain::record::{Category, Record};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod http;

#[derive(Debug, Clone)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// Query object describing one search request against the backend.
#[derive(Debug, Clone)]
pub struct RecordSearchQuery {
    pub filters: SearchFilters,
    pub pagination: Option<Pagination>,
}

impl RecordSearchQuery {
    pub fn new(filters: SearchFilters) -> Self {
        Self {
            filters,
            pagination: None,
        }
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Read access to the catalog backend.
#[allow(async_fn_in_trait)]
pub trait CatalogReader {
    /// Runs a filtered search and returns the total match count together
    /// with the requested page of records.
    async fn search(&self, query: &RecordSearchQuery) -> RepositoryResult<(usize, Vec<Record>)>;

    /// Returns the full category reference list.
    async fn list_categories(&self) -> RepositoryResult<Vec<Category>>;

    /// Returns the full organization reference list.
    async fn list_organizations(&self) -> RepositoryResult<Vec<String>>;
}
