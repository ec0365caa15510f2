use crate::{domain::requests::UpdateOrderStatusRequest, errors::ServiceError};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandServiceTrait {
    async fn update_status(&self, req: &UpdateOrderStatusRequest) -> Result<(), ServiceError>;
}
