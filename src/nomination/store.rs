use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use super::model::*;
use crate::db::{DbError, KvRepo};

/// The shortlist plus its durable mirror. Every mutation is written through
/// before it becomes visible.
pub struct NominationStore {
    list: RwLock<NominationList>,
    repo: Arc<dyn KvRepo>,
}

impl NominationStore {
    /// Restores the list saved under [`NOMINATION_LIST_KEY`], if any.
    pub async fn load(repo: Arc<dyn KvRepo>) -> Result<Self, NominationError> {
        let list = match repo.get_value(NOMINATION_LIST_KEY).await {
            Ok(entry) => match serde_json::from_str::<Vec<Nomination>>(&entry.value) {
                Ok(items) => {
                    let stored = items.len();
                    let list = NominationList::from_vec_lossy(items);
                    if list.len() != stored {
                        warn!("Dropped {} invalid stored nominations", stored - list.len());
                    }
                    list
                }
                Err(e) => {
                    warn!("Ignoring unreadable {}: {}", NOMINATION_LIST_KEY, e);
                    NominationList::new()
                }
            },
            Err(DbError::NotFound(_)) => NominationList::new(),
            Err(e) => return Err(e.into()),
        };

        info!("Loaded {} nominations", list.len());

        Ok(Self {
            list: RwLock::new(list),
            repo,
        })
    }

    pub async fn list(&self) -> NominationList {
        self.list.read().await.clone()
    }

    pub async fn nominate(
        &self,
        title: &str,
        poster_url: &str,
        year: &str,
    ) -> Result<NominationList, NominationError> {
        let mut list = self.list.write().await;

        let mut updated = list.clone();
        updated.push(Nomination::new(title, poster_url, year))?;
        self.persist(&updated).await?;

        info!(title = %title, count = updated.len(), "Nominated");
        *list = updated.clone();
        Ok(updated)
    }

    pub async fn remove(&self, title: &str) -> Result<NominationList, NominationError> {
        let mut list = self.list.write().await;

        let mut updated = list.clone();
        let removed = updated.remove(title);
        self.persist(&updated).await?;

        info!(title = %title, removed = removed, count = updated.len(), "Removed nomination");
        *list = updated.clone();
        Ok(updated)
    }

    async fn persist(&self, list: &NominationList) -> Result<(), NominationError> {
        let value = serde_json::to_string(list)?;
        self.repo.put_value(NOMINATION_LIST_KEY, &value).await?;
        Ok(())
    }
}
