use crate::{domain::responses::OrderResponse, errors::ServiceError};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn find_all(&self) -> Result<Vec<OrderResponse>, ServiceError>;
}
