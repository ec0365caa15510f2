use sqlx::FromRow;
use uuid::Uuid;

/// One row of `order_items` left-joined with its menu item.
#[derive(Debug, Clone, FromRow)]
pub struct OrderItemRecord {
    pub id: Uuid,
    pub order_id: Uuid,
    pub menu_item_id: Option<Uuid>,
    pub quantity: i32,
    pub unit_price: Option<f64>,
    pub total_price: Option<f64>,
    pub menu_item_ref: Option<Uuid>,
    pub menu_item_name: Option<String>,
}
