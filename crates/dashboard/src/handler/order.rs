use crate::state::AppState;
use axum::{
    Json,
    body::Bytes,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::{
    abstract_trait::{DynOrderCommandService, DynOrderQueryService},
    domain::{
        requests::UpdateOrderStatusRequest,
        responses::{OrderListResponse, SuccessResponse},
    },
    errors::{ErrorResponse, HttpError},
};
use std::sync::Arc;
use tracing::error;
use utoipa_axum::router::OpenApiRouter;

pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update order";

#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "Order",
    responses(
        (status = 200, description = "All orders, newest first, with customer and items", body = OrderListResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    )
)]
pub async fn get_orders(
    Extension(service): Extension<DynOrderQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let data = service.find_all().await?;
    Ok((StatusCode::OK, Json(OrderListResponse { data })))
}

#[utoipa::path(
    patch,
    path = "/api/orders",
    tag = "Order",
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = SuccessResponse),
        (status = 400, description = "orderId or status missing", body = ErrorResponse),
        (status = 500, description = "Store error or unreadable body", body = ErrorResponse)
    )
)]
pub async fn update_order_status(
    Extension(service): Extension<DynOrderCommandService>,
    body: Bytes,
) -> Result<impl IntoResponse, HttpError> {
    let req: UpdateOrderStatusRequest = serde_json::from_slice(&body).map_err(|e| {
        error!("❌ Failed to parse update body: {e}");
        HttpError::Internal(UPDATE_FAILED_MESSAGE.into())
    })?;

    service.update_status(&req).await?;

    Ok((StatusCode::OK, Json(SuccessResponse { success: true })))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/orders", get(get_orders).patch(update_order_status))
        .layer(Extension(app_state.di_container.order_query.clone()))
        .layer(Extension(app_state.di_container.order_command.clone()))
}
