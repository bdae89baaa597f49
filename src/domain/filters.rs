//! Filter state for the search page.
//!
//! Multi-select filters are held as ordered identifier sets; the comma-joined
//! wire form exists only at the URL boundary.

use std::collections::BTreeSet;

/// User-chosen search constraints. An empty field means "no constraint".
///
/// Scalar values are opaque strings: malformed input is carried through
/// unchanged rather than rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub q: String,
    pub organizations: BTreeSet<String>,
    pub author: String,
    pub category_ids: BTreeSet<String>,
    pub date_from: String,
    pub date_to: String,
    pub sort_by: String,
}

impl SearchFilters {
    /// Builds the filter state from raw query parameter values.
    pub fn from_params(
        q: &str,
        organizations: &str,
        author: &str,
        category_ids: &str,
        date_from: &str,
        date_to: &str,
        sort_by: &str,
    ) -> Self {
        Self {
            q: q.to_string(),
            organizations: split_ids(organizations),
            author: author.to_string(),
            category_ids: split_ids(category_ids),
            date_from: date_from.to_string(),
            date_to: date_to.to_string(),
            sort_by: sort_by.to_string(),
        }
    }

    /// Comma-joined organization identifiers for the wire form.
    pub fn organizations_param(&self) -> String {
        join_ids(&self.organizations)
    }

    /// Comma-joined category identifiers for the wire form.
    pub fn category_ids_param(&self) -> String {
        join_ids(&self.category_ids)
    }

    /// Serializes every non-empty filter into a query string, in a fixed
    /// field order. Passing `None` omits the page parameter, which resets
    /// navigation to the first page.
    pub fn query_string(&self, page: Option<usize>) -> String {
        let mut parts: Vec<String> = Vec::new();
        push_param(&mut parts, "q", &self.q);
        push_param(&mut parts, "categoryIds", &self.category_ids_param());
        push_param(&mut parts, "organizations", &self.organizations_param());
        push_param(&mut parts, "author", &self.author);
        push_param(&mut parts, "dateFrom", &self.date_from);
        push_param(&mut parts, "dateTo", &self.date_to);
        push_param(&mut parts, "sortBy", &self.sort_by);
        if let Some(page) = page {
            parts.push(format!("page={page}"));
        }
        parts.join("&")
    }
}

fn split_ids(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn join_ids(ids: &BTreeSet<String>) -> String {
    ids.iter().cloned().collect::<Vec<_>>().join(",")
}

fn push_param(parts: &mut Vec<String>, key: &str, value: &str) {
    if !value.is_empty() {
        parts.push(format!("{key}={}", urlencoding::encode(value)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_params_mean_no_constraints() {
        let filters = SearchFilters::from_params("", "", "", "", "", "", "");
        assert_eq!(filters, SearchFilters::default());
        assert_eq!(filters.query_string(None), "");
    }

    #[test]
    fn id_strings_split_into_sets() {
        let filters = SearchFilters::from_params("", "dao one,dao two", "", "3,,5,3", "", "", "");
        assert_eq!(
            filters.organizations,
            BTreeSet::from(["dao one".to_string(), "dao two".to_string()])
        );
        assert_eq!(
            filters.category_ids,
            BTreeSet::from(["3".to_string(), "5".to_string()])
        );
        assert_eq!(filters.category_ids_param(), "3,5");
        assert_eq!(filters.organizations_param(), "dao one,dao two");
    }

    #[test]
    fn query_string_uses_fixed_field_order() {
        let filters = SearchFilters::from_params(
            "budget",
            "dao one",
            "alice",
            "3",
            "2023-01-01",
            "2023-12-31",
            "title-asc",
        );
        assert_eq!(
            filters.query_string(None),
            "q=budget&categoryIds=3&organizations=dao%20one&author=alice\
             &dateFrom=2023-01-01&dateTo=2023-12-31&sortBy=title-asc"
        );
    }

    #[test]
    fn query_string_appends_page_when_given() {
        let filters = SearchFilters::from_params("grants", "", "", "", "", "", "");
        assert_eq!(filters.query_string(Some(2)), "q=grants&page=2");
        assert_eq!(filters.query_string(None), "q=grants");
    }

    #[test]
    fn query_string_percent_encodes_values() {
        let filters = SearchFilters::from_params("a&b=c", "", "", "", "", "", "");
        assert_eq!(filters.query_string(None), "q=a%26b%3Dc");
    }
}
