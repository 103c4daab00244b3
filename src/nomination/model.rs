use serde::{Deserialize, Serialize};

use crate::db::DbError;

/// Size of a complete shortlist.
pub const MAX_NOMINATIONS: usize = 5;

/// Storage key the list is mirrored under.
pub const NOMINATION_LIST_KEY: &str = "nominationList";

/// Titles are compared with surrounding whitespace ignored.
pub fn title_key(title: &str) -> &str {
    title.trim()
}

/// A single hit from the movie database. Read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub title: String,
    /// May be the sentinel `"N/A"`.
    pub poster_url: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nomination {
    pub title: String,
    pub poster_url: String,
    pub year: String,
}

impl Nomination {
    pub fn new(title: &str, poster_url: &str, year: &str) -> Self {
        Self {
            title: title_key(title).to_string(),
            poster_url: poster_url.to_string(),
            year: year.to_string(),
        }
    }
}

/// Ordered shortlist, unique by title, never longer than [`MAX_NOMINATIONS`].
///
/// Serializes as a plain JSON array. Stored data is read back through
/// [`NominationList::from_vec_lossy`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NominationList {
    items: Vec<Nomination>,
}

impl NominationList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the first occurrence of each title and at most
    /// [`MAX_NOMINATIONS`] entries.
    pub fn from_vec_lossy(items: Vec<Nomination>) -> Self {
        let mut list = Self::new();
        for item in items {
            if list.is_full() {
                break;
            }
            if !list.contains(&item.title) {
                list.items.push(item);
            }
        }
        list
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= MAX_NOMINATIONS
    }

    /// Free slots left on the shortlist.
    pub fn remaining(&self) -> usize {
        MAX_NOMINATIONS.saturating_sub(self.items.len())
    }

    pub fn contains(&self, title: &str) -> bool {
        let key = title_key(title);
        self.items.iter().any(|n| title_key(&n.title) == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Nomination> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Nomination] {
        &self.items
    }

    pub fn push(&mut self, nomination: Nomination) -> Result<(), NominationError> {
        if self.is_full() {
            return Err(NominationError::Full);
        }
        if self.contains(&nomination.title) {
            return Err(NominationError::AlreadyNominated(nomination.title));
        }
        self.items.push(nomination);
        Ok(())
    }

    /// Drops every entry with this title and returns how many went.
    pub fn remove(&mut self, title: &str) -> usize {
        let before = self.items.len();
        let key = title_key(title);
        self.items.retain(|n| title_key(&n.title) != key);
        before - self.items.len()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NominationError {
    #[error("Nomination list already holds {} movies", MAX_NOMINATIONS)]
    Full,
    #[error("Already nominated: {0}")]
    AlreadyNominated(String),
    #[error("Storage error: {0}")]
    Storage(#[from] DbError),
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
