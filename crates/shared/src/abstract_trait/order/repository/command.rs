use crate::errors::RepositoryError;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    /// Sets `status` and bumps `updated_at`. Returns the number of rows touched.
    async fn update_status(&self, order_id: &str, status: &str) -> Result<u64, RepositoryError>;
}
