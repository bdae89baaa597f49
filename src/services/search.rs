//! Search page loading: backend calls, fallback policy, view assembly.

use crate::domain::filters::SearchFilters;
use crate::dto::search::SearchPageData;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{CatalogReader, RecordSearchQuery};
use crate::services::ServiceResult;

/// Loads everything the search page needs for one request.
///
/// Failures are not surfaced: any backend error is logged and collapsed
/// into the empty result set, so the rendered page is indistinguishable
/// from a search with zero matches.
pub async fn load_search_page<R>(repo: &R, filters: SearchFilters, page: usize) -> SearchPageData
where
    R: CatalogReader + ?Sized,
{
    match fetch_search_page(repo, &filters, page).await {
        Ok(data) => data,
        Err(err) => {
            log::error!("Failed to load search page: {err}");
            SearchPageData::empty(&filters)
        }
    }
}

/// Issues the three backend requests concurrently and joins them before
/// assembling the page. All-or-nothing: one failure discards the lot.
async fn fetch_search_page<R>(
    repo: &R,
    filters: &SearchFilters,
    page: usize,
) -> ServiceResult<SearchPageData>
where
    R: CatalogReader + ?Sized,
{
    let query = RecordSearchQuery::new(filters.clone()).paginate(page, DEFAULT_ITEMS_PER_PAGE);

    let ((total_count, records), categories, organizations) = tokio::try_join!(
        repo.search(&query),
        repo.list_categories(),
        repo.list_organizations()
    )?;

    let total_pages = total_count.div_ceil(DEFAULT_ITEMS_PER_PAGE);
    let records = Paginated::new(records, page, total_pages);

    Ok(SearchPageData::new(
        filters,
        total_count,
        records,
        categories,
        organizations,
    ))
}
