use actix_web::{Responder, get, web};
use serde::Deserialize;
use tera::Tera;

use crate::domain::filters::SearchFilters;
use crate::repository::http::HttpCatalogRepository;
use crate::routes::{base_context, render_template};
use crate::services::search::load_search_page;

/// Query parameters accepted by the search page. Every field is optional;
/// malformed values never produce an error response.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQueryParams {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub organizations: String,
    #[serde(default)]
    pub author: String,
    #[serde(default, rename = "categoryIds")]
    pub category_ids: String,
    #[serde(default, rename = "dateFrom")]
    pub date_from: String,
    #[serde(default, rename = "dateTo")]
    pub date_to: String,
    #[serde(default, rename = "sortBy")]
    pub sort_by: String,
    #[serde(default)]
    pub page: Option<String>,
}

impl SearchQueryParams {
    /// Requested page number; junk and zero fall back to 1.
    pub fn page(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|page| page.parse().ok())
            .filter(|&page| page > 0)
            .unwrap_or(1)
    }
}

impl From<&SearchQueryParams> for SearchFilters {
    fn from(params: &SearchQueryParams) -> Self {
        SearchFilters::from_params(
            &params.q,
            &params.organizations,
            &params.author,
            &params.category_ids,
            &params.date_from,
            &params.date_to,
            &params.sort_by,
        )
    }
}

#[get("/search")]
pub async fn show_search(
    params: web::Query<SearchQueryParams>,
    repo: web::Data<HttpCatalogRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let page = params.page();
    let filters = SearchFilters::from(&*params);

    let data = load_search_page(repo.get_ref(), filters, page).await;

    let mut context = base_context("search");
    context.insert("search", &data);
    render_template(&tera, "search/index.html", &context)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(query: &str) -> SearchQueryParams {
        serde_html_form::from_str(query).unwrap()
    }

    #[test]
    fn query_string_round_trips_every_field() {
        let filters = SearchFilters::from_params(
            "budget grants",
            "dao one,dao two",
            "alice",
            "3,5",
            "2023-01-01",
            "2023-12-31",
            "title-asc",
        );

        let parsed = parse(&filters.query_string(None));

        assert_eq!(SearchFilters::from(&parsed), filters);
        assert_eq!(parsed.page(), 1);
    }

    #[test]
    fn page_parameter_round_trips() {
        let filters = SearchFilters::from_params("grants", "", "", "", "", "", "");
        let parsed = parse(&filters.query_string(Some(4)));

        assert_eq!(SearchFilters::from(&parsed), filters);
        assert_eq!(parsed.page(), 4);
    }

    #[test]
    fn empty_query_string_yields_no_constraints() {
        let parsed = parse("");
        assert_eq!(SearchFilters::from(&parsed), SearchFilters::default());
        assert_eq!(parsed.page(), 1);
    }

    #[test]
    fn junk_page_values_fall_back_to_one() {
        assert_eq!(parse("page=abc").page(), 1);
        assert_eq!(parse("page=0").page(), 1);
        assert_eq!(parse("page=-2").page(), 1);
        assert_eq!(parse("page=2").page(), 2);
    }

    #[test]
    fn unconstrained_fields_survive_as_opaque_strings() {
        let parsed = parse("q=&categoryIds=not-a-number&dateFrom=sometime");
        let filters = SearchFilters::from(&parsed);

        assert_eq!(filters.category_ids_param(), "not-a-number");
        assert_eq!(filters.date_from, "sometime");

        let reparsed = parse(&filters.query_string(None));
        assert_eq!(SearchFilters::from(&reparsed), filters);
    }
}
