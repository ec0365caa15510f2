use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub const REQUIRED_FIELDS_MESSAGE: &str = "orderId and status are required";

/// Body of `PATCH /api/orders`. Both fields are optional at the wire level so
/// that a missing field is reported as a client error rather than a parse
/// failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderStatusRequest {
    #[validate(required, length(min = 1))]
    #[schema(example = "5d0c7a0e-3b7f-4b8e-9a51-2f7c1f0a9b11")]
    pub order_id: Option<String>,

    #[validate(required, length(min = 1))]
    #[schema(example = "preparing")]
    pub status: Option<String>,
}

impl UpdateOrderStatusRequest {
    pub fn new(order_id: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            order_id: Some(order_id.into()),
            status: Some(status.into()),
        }
    }
}
