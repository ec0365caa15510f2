use crate::{
    errors::RepositoryError,
    model::{OrderItemRecord, OrderRecord},
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    /// Every order, newest first, joined with its customer.
    async fn find_all(&self) -> Result<Vec<OrderRecord>, RepositoryError>;

    /// Items of the given orders joined with their menu item.
    async fn find_items_by_orders(
        &self,
        order_ids: &[Uuid],
    ) -> Result<Vec<OrderItemRecord>, RepositoryError>;
}
