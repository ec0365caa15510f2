use crate::{
    abstract_trait::OrderCommandRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn update_status(&self, order_id: &str, status: &str) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // The id is cast by the store so malformed ids surface as store errors.
        let result = sqlx::query(
            r#"
            UPDATE orders
            SET status     = $1,
                updated_at = now()
            WHERE id = $2::uuid
            "#,
        )
        .bind(status)
        .bind(order_id)
        .execute(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update status of order {order_id}: {:?}", err);
            RepositoryError::from(err)
        })?;

        info!(
            "🔄 Set status of order {order_id} to '{status}' ({} rows)",
            result.rows_affected()
        );
        Ok(result.rows_affected())
    }
}
