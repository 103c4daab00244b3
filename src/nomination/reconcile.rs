use super::model::{NominationList, SearchResult};

pub const NO_MOVIES_FOUND: &str = "No Movies Found!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciled {
    Results(Vec<SearchResult>),
    NoMoviesFound,
}

/// Drops already-nominated titles and keeps only as many results as there
/// are free slots, in source order.
pub fn reconcile(results: Vec<SearchResult>, nominations: &NominationList) -> Reconciled {
    if nominations.is_full() || results.is_empty() {
        return Reconciled::NoMoviesFound;
    }

    let remaining: Vec<SearchResult> = results
        .into_iter()
        .filter(|r| !nominations.contains(&r.title))
        .take(nominations.remaining())
        .collect();

    if remaining.is_empty() {
        return Reconciled::NoMoviesFound;
    }

    Reconciled::Results(remaining)
}
