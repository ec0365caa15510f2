use crate::{
    abstract_trait::{DynOrderCommandRepository, OrderCommandServiceTrait},
    domain::requests::{REQUIRED_FIELDS_MESSAGE, UpdateOrderStatusRequest},
    errors::ServiceError,
    utils::{Method, Metrics, Status as StatusUtils},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use tokio::time::Instant;
use tracing::{error, info, warn};
use validator::Validate;

#[derive(Clone)]
pub struct OrderCommandService {
    command: DynOrderCommandRepository,
    metrics: Metrics,
}

impl OrderCommandService {
    pub fn new(command: DynOrderCommandRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("order_command", registry);

        Self { command, metrics }
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn update_status(&self, req: &UpdateOrderStatusRequest) -> Result<(), ServiceError> {
        let (Some(order_id), Some(status)) = (req.order_id.as_deref(), req.status.as_deref())
        else {
            warn!("⚠️ Rejected status update with missing fields: {req:?}");
            return Err(ServiceError::Validation(vec![
                REQUIRED_FIELDS_MESSAGE.to_string(),
            ]));
        };

        if let Err(errors) = req.validate() {
            warn!("⚠️ Rejected status update: {errors}");
            return Err(ServiceError::Validation(vec![
                REQUIRED_FIELDS_MESSAGE.to_string(),
            ]));
        }

        info!("📝 Updating order {order_id} to status '{status}'");
        let start = Instant::now();

        match self.command.update_status(order_id, status).await {
            Ok(rows) => {
                if rows == 0 {
                    warn!("⚠️ No order matched id {order_id}; reporting success anyway");
                }
                self.metrics.record(
                    Method::Patch,
                    StatusUtils::Success,
                    start.elapsed().as_secs_f64(),
                );
                Ok(())
            }
            Err(e) => {
                error!("❌ Failed to update order {order_id}: {e:?}");
                self.metrics.record(
                    Method::Patch,
                    StatusUtils::Error,
                    start.elapsed().as_secs_f64(),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }
}
