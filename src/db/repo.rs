use async_trait::async_trait;

use super::model::*;

#[async_trait]
pub trait KvRepo: Send + Sync {
    async fn get_value(&self, key: &str) -> DbResult<KvEntry>;
    async fn put_value(&self, key: &str, value: &str) -> DbResult<()>;
}
