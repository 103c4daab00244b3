use serde::{Deserialize, Serialize};

use crate::nomination::SearchResult;

/// Body of `GET /?s=...`. On failure OMDb answers `{"Response":"False","Error":"..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OmdbSearchResponse {
    #[serde(rename = "Response", default)]
    pub response: String,
    #[serde(rename = "Search", default)]
    pub search: Option<Vec<OmdbMovie>>,
    #[serde(rename = "totalResults", default)]
    pub total_results: Option<String>,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OmdbMovie {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "imdbID", default)]
    pub imdb_id: Option<String>,
    #[serde(rename = "Type", default)]
    pub movie_type: Option<String>,
    #[serde(rename = "Poster", default)]
    pub poster: String,
}

impl OmdbSearchResponse {
    pub fn is_success(&self) -> bool {
        self.response.eq_ignore_ascii_case("true")
    }

    /// The results in source order; empty when the lookup failed.
    pub fn into_results(self) -> Vec<SearchResult> {
        if !self.is_success() {
            return Vec::new();
        }
        self.search
            .unwrap_or_default()
            .into_iter()
            .map(SearchResult::from)
            .collect()
    }
}

impl From<OmdbMovie> for SearchResult {
    fn from(movie: OmdbMovie) -> Self {
        SearchResult {
            title: movie.title,
            poster_url: movie.poster,
            year: movie.year,
        }
    }
}
