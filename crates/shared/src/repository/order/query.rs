use crate::{
    abstract_trait::OrderQueryRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::{OrderItemRecord, OrderRecord},
};
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_all(&self) -> Result<Vec<OrderRecord>, RepositoryError> {
        info!("🔍 Fetching all orders");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let orders = sqlx::query_as::<_, OrderRecord>(
            r#"
            SELECT
                o.id,
                o.customer_id,
                o.status::text              AS status,
                o.subtotal::float8          AS subtotal,
                o.discount_amount::float8   AS discount_amount,
                o.total::float8             AS total,
                o.delivery_address,
                o.notes,
                o.created_at,
                o.updated_at,
                c.id                        AS customer_ref,
                c.name                      AS customer_name,
                c.email                     AS customer_email,
                c.phone                     AS customer_phone
            FROM orders o
            LEFT JOIN customers c ON c.id = o.customer_id
            ORDER BY o.created_at DESC
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch orders: {:?}", e);
            RepositoryError::from(e)
        })?;

        info!("✅ Fetched {} orders", orders.len());
        Ok(orders)
    }

    async fn find_items_by_orders(
        &self,
        order_ids: &[Uuid],
    ) -> Result<Vec<OrderItemRecord>, RepositoryError> {
        info!("📦 Fetching order items for {} orders", order_ids.len());

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let items = sqlx::query_as::<_, OrderItemRecord>(
            r#"
            SELECT
                oi.id,
                oi.order_id,
                oi.menu_item_id,
                oi.quantity,
                oi.unit_price::float8       AS unit_price,
                oi.total_price::float8      AS total_price,
                m.id                        AS menu_item_ref,
                m.name                      AS menu_item_name
            FROM order_items oi
            LEFT JOIN menu_items m ON m.id = oi.menu_item_id
            WHERE oi.order_id = ANY($1)
            "#,
        )
        .bind(order_ids)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch order items: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(items)
    }
}
