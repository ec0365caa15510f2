use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// One row of `orders` left-joined with its customer.
#[derive(Debug, Clone, FromRow)]
pub struct OrderRecord {
    pub id: Uuid,
    pub customer_id: Option<Uuid>,
    pub status: String,
    pub subtotal: Option<f64>,
    pub discount_amount: Option<f64>,
    pub total: Option<f64>,
    pub delivery_address: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    /// `customers.id`; `None` when the join found no customer.
    pub customer_ref: Option<Uuid>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
}
