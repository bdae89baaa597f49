//! View models for the search page template.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::filters::SearchFilters;
use crate::domain::record::{Category, Record};
use crate::pagination::Paginated;

/// One entry of a select control.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    fn new(value: impl Into<String>, label: impl Into<String>, selected: bool) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            selected,
        }
    }
}

/// Category options with the current selection marked. Selection is the
/// intersection of the chosen identifier set with the reference list.
pub fn category_options(
    categories: &[Category],
    selected: &BTreeSet<String>,
) -> Vec<SelectOption> {
    categories
        .iter()
        .map(|category| {
            let id = category.id.to_string();
            let is_selected = selected.contains(&id);
            SelectOption::new(id, category.name.clone(), is_selected)
        })
        .collect()
}

/// Organization options; organizations are their own identifiers.
pub fn organization_options(
    organizations: &[String],
    selected: &BTreeSet<String>,
) -> Vec<SelectOption> {
    organizations
        .iter()
        .map(|org| SelectOption::new(org.clone(), org.clone(), selected.contains(org)))
        .collect()
}

/// The fixed sort-order list offered by the search form.
pub fn sort_by_options(current: &str) -> Vec<SelectOption> {
    [
        ("rank", "Ranking desc"),
        ("title-asc", "Title (A-Z)"),
        ("title-desc", "Title (Z-A)"),
        ("author-asc", "Author (A-Z)"),
        ("author-desc", "Author (Z-A)"),
        ("date-desc", "Most Recent"),
    ]
    .into_iter()
    .map(|(value, label)| SelectOption::new(value, label, value == current))
    .collect()
}

/// Filter values echoed back into the form controls.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct FiltersView {
    pub q: String,
    pub organizations: String,
    pub author: String,
    pub category_ids: String,
    pub date_from: String,
    pub date_to: String,
    pub sort_by: String,
}

impl From<&SearchFilters> for FiltersView {
    fn from(filters: &SearchFilters) -> Self {
        Self {
            q: filters.q.clone(),
            organizations: filters.organizations_param(),
            author: filters.author.clone(),
            category_ids: filters.category_ids_param(),
            date_from: filters.date_from.clone(),
            date_to: filters.date_to.clone(),
            sort_by: filters.sort_by.clone(),
        }
    }
}

/// Direct link inside the pagination window.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct PageLink {
    pub number: usize,
    pub url: String,
    pub current: bool,
}

/// Everything the search template needs for one request.
#[derive(Debug, Serialize)]
pub struct SearchPageData {
    pub records: Paginated<Record>,
    pub total_count: usize,
    pub category_options: Vec<SelectOption>,
    pub organization_options: Vec<SelectOption>,
    pub sort_by_options: Vec<SelectOption>,
    pub filters: FiltersView,
    /// Windowed page links; `None` entries render as gaps.
    pub page_links: Vec<Option<PageLink>>,
    pub prev_url: Option<String>,
    pub next_url: Option<String>,
}

impl SearchPageData {
    pub fn new(
        filters: &SearchFilters,
        total_count: usize,
        records: Paginated<Record>,
        categories: Vec<Category>,
        organizations: Vec<String>,
    ) -> Self {
        let prev_url = records
            .has_previous()
            .then(|| page_url(filters, records.page - 1));
        let next_url = records
            .has_next()
            .then(|| page_url(filters, records.page + 1));
        let page_links = records
            .pages
            .iter()
            .map(|entry| {
                entry.map(|number| PageLink {
                    number,
                    url: page_url(filters, number),
                    current: number == records.page,
                })
            })
            .collect();

        Self {
            category_options: category_options(&categories, &filters.category_ids),
            organization_options: organization_options(&organizations, &filters.organizations),
            sort_by_options: sort_by_options(&filters.sort_by),
            filters: FiltersView::from(filters),
            total_count,
            records,
            page_links,
            prev_url,
            next_url,
        }
    }

    /// Default prop set used when any backend call fails: no records, zero
    /// total, empty reference lists.
    pub fn empty(filters: &SearchFilters) -> Self {
        Self::new(filters, 0, Paginated::new(Vec::new(), 1, 0), Vec::new(), Vec::new())
    }
}

fn page_url(filters: &SearchFilters, page: usize) -> String {
    format!("/search?{}", filters.query_string(Some(page)))
}
