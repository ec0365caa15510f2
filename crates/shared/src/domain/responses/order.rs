use crate::model::{OrderItemRecord, OrderRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CustomerResponse {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MenuItemRef {
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderItemResponse {
    pub id: Uuid,
    pub order_id: Uuid,
    pub menu_item_id: Option<Uuid>,
    pub quantity: i32,
    pub unit_price: Option<f64>,
    pub total_price: Option<f64>,
    pub menu_item: Option<MenuItemRef>,
}

impl From<OrderItemRecord> for OrderItemResponse {
    fn from(value: OrderItemRecord) -> Self {
        let menu_item = value.menu_item_ref.map(|_| MenuItemRef {
            name: value.menu_item_name,
        });

        OrderItemResponse {
            id: value.id,
            order_id: value.order_id,
            menu_item_id: value.menu_item_id,
            quantity: value.quantity,
            unit_price: value.unit_price,
            total_price: value.total_price,
            menu_item,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
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
    pub customer: Option<CustomerResponse>,
    pub order_items: Vec<OrderItemResponse>,
}

impl OrderResponse {
    pub fn from_records(order: OrderRecord, items: Vec<OrderItemRecord>) -> Self {
        let customer = order.customer_ref.map(|_| CustomerResponse {
            name: order.customer_name,
            email: order.customer_email,
            phone: order.customer_phone,
        });

        OrderResponse {
            id: order.id,
            customer_id: order.customer_id,
            status: order.status,
            subtotal: order.subtotal,
            discount_amount: order.discount_amount,
            total: order.total,
            delivery_address: order.delivery_address,
            notes: order.notes,
            created_at: order.created_at,
            updated_at: order.updated_at,
            customer,
            order_items: items.into_iter().map(OrderItemResponse::from).collect(),
        }
    }

    /// Last eight characters of the id, upper-cased, as shown to staff.
    pub fn short_id(&self) -> String {
        let id = self.id.to_string();
        id[id.len() - 8..].to_uppercase()
    }

    pub fn customer_name(&self) -> Option<&str> {
        self.customer.as_ref().and_then(|c| c.name.as_deref())
    }

    pub fn customer_email(&self) -> Option<&str> {
        self.customer.as_ref().and_then(|c| c.email.as_deref())
    }

    pub fn customer_phone(&self) -> Option<&str> {
        self.customer.as_ref().and_then(|c| c.phone.as_deref())
    }
}

/// Body of a successful `GET /api/orders`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderListResponse {
    pub data: Vec<OrderResponse>,
}

/// Body of a successful `PATCH /api/orders`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(customer: bool) -> OrderRecord {
        OrderRecord {
            id: Uuid::parse_str("5d0c7a0e-3b7f-4b8e-9a51-2f7c1f0a9b11").unwrap(),
            customer_id: Some(Uuid::new_v4()),
            status: "pending".into(),
            subtotal: Some(20.0),
            discount_amount: Some(0.0),
            total: Some(20.0),
            delivery_address: None,
            notes: None,
            created_at: Utc::now(),
            updated_at: None,
            customer_ref: customer.then(Uuid::new_v4),
            customer_name: customer.then(|| "Ana".to_string()),
            customer_email: customer.then(|| "ana@example.com".to_string()),
            customer_phone: None,
        }
    }

    #[test]
    fn missing_join_serializes_as_null() {
        let order = OrderResponse::from_records(record(false), vec![]);
        let json = serde_json::to_value(&order).unwrap();

        assert!(json["customer"].is_null());
        assert_eq!(json["order_items"], serde_json::json!([]));
    }

    #[test]
    fn nested_customer_and_menu_item() {
        let order_id = Uuid::new_v4();
        let item = OrderItemRecord {
            id: Uuid::new_v4(),
            order_id,
            menu_item_id: None,
            quantity: 2,
            unit_price: Some(5.0),
            total_price: Some(10.0),
            menu_item_ref: Some(Uuid::new_v4()),
            menu_item_name: Some("Nasi Goreng".into()),
        };

        let order = OrderResponse::from_records(record(true), vec![item]);
        let json = serde_json::to_value(&order).unwrap();

        assert_eq!(json["customer"]["name"], "Ana");
        assert_eq!(json["order_items"][0]["menu_item"]["name"], "Nasi Goreng");
        assert_eq!(json["order_items"][0]["quantity"], 2);
    }

    #[test]
    fn short_id_is_last_eight_upper() {
        let order = OrderResponse::from_records(record(false), vec![]);
        assert_eq!(order.short_id(), "1F0A9B11");
    }
}
