use serde::Serialize;

use super::model::{Nomination, NominationList, SearchResult};
use super::reconcile::NO_MOVIES_FOUND;
use super::search::{run_search, SearchOutcome, QUERY_TOO_SHORT};
use crate::omdb::{MovieSearch, OmdbError};

/// Poster value OMDb uses when it has no image.
pub const NO_POSTER: &str = "N/A";

/// Shown instead of a missing poster.
pub const POSTER_PLACEHOLDER: &str = "/placeholder.jpg";

/// What a client draws for one movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub title: String,
    pub poster_url: String,
    pub year: String,
}

impl Card {
    fn new(title: &str, poster_url: &str, year: &str) -> Self {
        let poster_url = if poster_url == NO_POSTER {
            POSTER_PLACEHOLDER
        } else {
            poster_url
        };
        Self {
            title: title.to_string(),
            poster_url: poster_url.to_string(),
            year: year.to_string(),
        }
    }
}

impl From<&SearchResult> for Card {
    fn from(r: &SearchResult) -> Self {
        Card::new(&r.title, &r.poster_url, &r.year)
    }
}

impl From<&Nomination> for Card {
    fn from(n: &Nomination) -> Self {
        Card::new(&n.title, &n.poster_url, &n.year)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ViewState {
    /// All slots taken; search input is suppressed until a removal.
    Completed { nominations: Vec<Card> },
    Error {
        message: String,
        nominations: Vec<Card>,
    },
    Results {
        results: Vec<Card>,
        nominations: Vec<Card>,
    },
}

impl ViewState {
    pub fn nominations(&self) -> &[Card] {
        match self {
            ViewState::Completed { nominations }
            | ViewState::Error { nominations, .. }
            | ViewState::Results { nominations, .. } => nominations,
        }
    }
}

pub async fn build_view(
    searcher: &dyn MovieSearch,
    raw_query: &str,
    nominations: &NominationList,
) -> Result<ViewState, OmdbError> {
    let cards: Vec<Card> = nominations.iter().map(Card::from).collect();

    if nominations.is_full() {
        return Ok(ViewState::Completed { nominations: cards });
    }

    let message = match run_search(searcher, raw_query, nominations).await? {
        SearchOutcome::Results(results) => {
            return Ok(ViewState::Results {
                results: results.iter().map(Card::from).collect(),
                nominations: cards,
            })
        }
        SearchOutcome::QueryTooShort => QUERY_TOO_SHORT,
        SearchOutcome::NoMoviesFound => NO_MOVIES_FOUND,
    };

    Ok(ViewState::Error {
        message: message.to_string(),
        nominations: cards,
    })
}
