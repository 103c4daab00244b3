use tracing::debug;

use super::model::{NominationList, SearchResult};
use super::reconcile::{reconcile, Reconciled, NO_MOVIES_FOUND};
use crate::omdb::{MovieSearch, OmdbError};

/// Shorter queries are not sent to the movie database.
pub const MIN_QUERY_CHARS: usize = 3;

pub const QUERY_TOO_SHORT: &str = "Please enter at least 3 characters to refine search.";

/// A trimmed query of at least [`MIN_QUERY_CHARS`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.chars().count() < MIN_QUERY_CHARS {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    QueryTooShort,
    NoMoviesFound,
    Results(Vec<SearchResult>),
}

impl SearchOutcome {
    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            SearchOutcome::QueryTooShort => Some(QUERY_TOO_SHORT),
            SearchOutcome::NoMoviesFound => Some(NO_MOVIES_FOUND),
            SearchOutcome::Results(_) => None,
        }
    }
}

/// Validates `raw_query`, searches, and reconciles against `nominations`.
///
/// No request is made for a short query or when the shortlist is full.
pub async fn run_search(
    searcher: &dyn MovieSearch,
    raw_query: &str,
    nominations: &NominationList,
) -> Result<SearchOutcome, OmdbError> {
    let Some(query) = SearchQuery::parse(raw_query) else {
        return Ok(SearchOutcome::QueryTooShort);
    };

    let results = if nominations.is_full() {
        Vec::new()
    } else {
        searcher.search(query.as_str()).await?
    };

    debug!(query = %query.as_str(), hits = results.len(), "Search");

    Ok(match reconcile(results, nominations) {
        Reconciled::Results(results) => SearchOutcome::Results(results),
        Reconciled::NoMoviesFound => SearchOutcome::NoMoviesFound,
    })
}
