use lien_api::category::SearchCategory;
use lien_api::query::SearchCriteria;
use lien_api::response::{SearchResponse, SearchResult};
use thiserror::Error;

use crate::columns::{table_headers, Column};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresentError {
    #[error("{0} search response carries no usable criteria")]
    MissingCriteria(SearchCategory),
}

/// Everything the results screen needs, derived from one response snapshot.
/// Borrows the response; nothing is written back.
#[derive(Debug)]
pub struct ResultsView<'a> {
    pub searched: bool,
    pub search_value: String,
    pub total_results: u64,
    pub body: ResultsBody<'a>,
}

#[derive(Debug)]
pub enum ResultsBody<'a> {
    /// Zero matches: show the notice, no table state is built.
    NoMatches { category_label: &'static str },
    Table(ResultsTable<'a>),
}

#[derive(Debug)]
pub struct ResultsTable<'a> {
    pub headers: &'static [Column],
    pub rows: &'a [SearchResult],
    /// Rows pre-selected as exact matches, a subsequence of `rows`.
    pub selected: Vec<&'a SearchResult>,
}

impl ResultsTable<'_> {
    pub fn exact_matches(&self) -> usize {
        self.selected.len()
    }
}

/// Derive the view state for a response. Pure: the same response always
/// yields the same view.
pub fn present(response: &SearchResponse) -> Result<ResultsView<'_>, PresentError> {
    let category = response.search_query.category;
    let search_value = echo_value(category, &response.search_query.criteria)
        .ok_or(PresentError::MissingCriteria(category))?;

    if response.returned_results_size as usize != response.results.len() {
        tracing::warn!(
            "[results] returned size mismatch for search {}: declared={} actual={}",
            response.search_id.as_deref().unwrap_or("-"),
            response.returned_results_size,
            response.results.len()
        );
    }

    if response.total_results_size == 0 {
        return Ok(ResultsView {
            searched: true,
            search_value,
            total_results: 0,
            body: ResultsBody::NoMatches { category_label: category.label() },
        });
    }

    let selected = response
        .results
        .iter()
        .filter(|row| is_exact_match(category, &response.search_query.criteria, row))
        .collect();
    Ok(ResultsView {
        searched: true,
        search_value,
        total_results: response.total_results_size,
        body: ResultsBody::Table(ResultsTable {
            headers: table_headers(category),
            rows: &response.results,
            selected,
        }),
    })
}

fn echo_value(category: SearchCategory, criteria: &SearchCriteria) -> Option<String> {
    if category.is_value_keyed() {
        criteria.value.clone()
    } else {
        criteria.debtor_name.as_ref().map(|n| n.display())
    }
}

/// True when the row's identifying field for the search category equals
/// the submitted criteria. Rows missing that payload never match.
pub fn is_exact_match(
    category: SearchCategory,
    criteria: &SearchCriteria,
    row: &SearchResult,
) -> bool {
    let value = criteria.value.as_deref();
    match category {
        SearchCategory::SerialNumber => {
            eq_exact(value, vehicle_field(row, |v| v.serial_number.as_deref()))
        }
        SearchCategory::MhrNumber => eq_exact(
            value,
            vehicle_field(row, |v| v.manufactured_home_registration_number.as_deref()),
        ),
        // D.O.T. marks are case-insensitive
        SearchCategory::Aircraft => {
            eq_ignore_case(value, vehicle_field(row, |v| v.serial_number.as_deref()))
        }
        SearchCategory::RegistrationNumber => {
            eq_ignore_case(value, row.registration_number.as_deref())
        }
        SearchCategory::BusinessDebtor => {
            let field = row.debtor.as_ref().and_then(|d| d.business_name.as_deref());
            match (value, field) {
                (Some(q), Some(f)) => {
                    collapse_ws(q).eq_ignore_ascii_case(&collapse_ws(f))
                }
                _ => false,
            }
        }
        SearchCategory::IndividualDebtor => {
            let name = row.debtor.as_ref().and_then(|d| d.person_name.as_ref());
            match (criteria.debtor_name.as_ref(), name) {
                (Some(q), Some(n)) => {
                    q.first.trim().eq_ignore_ascii_case(n.first.trim())
                        && q.last.trim().eq_ignore_ascii_case(n.last.trim())
                        && second_name_matches(q.second.as_deref(), n.second.as_deref())
                }
                _ => false,
            }
        }
    }
}

fn vehicle_field<'a>(
    row: &'a SearchResult,
    f: impl Fn(&'a lien_api::response::VehicleCollateral) -> Option<&'a str>,
) -> Option<&'a str> {
    row.vehicle_collateral.as_ref().and_then(f)
}

fn eq_exact(query: Option<&str>, field: Option<&str>) -> bool {
    matches!((query, field), (Some(q), Some(f)) if q == f)
}

fn eq_ignore_case(query: Option<&str>, field: Option<&str>) -> bool {
    matches!((query, field), (Some(q), Some(f)) if q.eq_ignore_ascii_case(f))
}

/// A middle name in the criteria must match; one only on the row is fine.
fn second_name_matches(query: Option<&str>, field: Option<&str>) -> bool {
    match query.map(str::trim).filter(|s| !s.is_empty()) {
        Some(q) => field
            .map(str::trim)
            .is_some_and(|f| q.eq_ignore_ascii_case(f)),
        None => true,
    }
}

fn collapse_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
