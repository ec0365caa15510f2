use crate::{
    abstract_trait::{DynOrderQueryRepository, OrderQueryServiceTrait},
    domain::responses::OrderResponse,
    errors::ServiceError,
    model::OrderItemRecord,
    utils::{Method, Metrics, Status as StatusUtils},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::collections::HashMap;
use tokio::time::Instant;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct OrderQueryService {
    query: DynOrderQueryRepository,
    metrics: Metrics,
}

impl OrderQueryService {
    pub fn new(query: DynOrderQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("order_query", registry);

        Self { query, metrics }
    }

    fn complete(&self, start: Instant, status: StatusUtils) {
        self.metrics
            .record(Method::Get, status, start.elapsed().as_secs_f64());
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_all(&self) -> Result<Vec<OrderResponse>, ServiceError> {
        let start = Instant::now();

        let orders = match self.query.find_all().await {
            Ok(orders) => orders,
            Err(e) => {
                error!("❌ Failed to find orders: {e:?}");
                self.complete(start, StatusUtils::Error);
                return Err(ServiceError::Repo(e));
            }
        };

        let order_ids: Vec<Uuid> = orders.iter().map(|order| order.id).collect();

        let items = if order_ids.is_empty() {
            Vec::new()
        } else {
            match self.query.find_items_by_orders(&order_ids).await {
                Ok(items) => items,
                Err(e) => {
                    error!("❌ Failed to find order items: {e:?}");
                    self.complete(start, StatusUtils::Error);
                    return Err(ServiceError::Repo(e));
                }
            }
        };

        let mut items_by_order: HashMap<Uuid, Vec<OrderItemRecord>> = HashMap::new();
        for item in items {
            items_by_order.entry(item.order_id).or_default().push(item);
        }

        let response: Vec<OrderResponse> = orders
            .into_iter()
            .map(|order| {
                let items = items_by_order.remove(&order.id).unwrap_or_default();
                OrderResponse::from_records(order, items)
            })
            .collect();

        self.complete(start, StatusUtils::Success);
        info!("✅ Found {} orders", response.len());

        Ok(response)
    }
}
