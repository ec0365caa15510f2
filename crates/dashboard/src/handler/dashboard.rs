use crate::{dashboard::DashboardQuery, state::AppState};
use askama::Template;
use axum::{
    Form, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, warn};

const ORDERS_PAGE: &str = "/dashboard/orders";

#[derive(Debug, Deserialize)]
pub struct StatusForm {
    pub status: String,
}

fn render<T: Template>(status: StatusCode, page: T) -> Response {
    match page.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            error!("❌ Failed to render page: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}

pub async fn index() -> Redirect {
    Redirect::to(ORDERS_PAGE)
}

pub async fn orders_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DashboardQuery>,
) -> Response {
    let page = state.dashboard.render_orders(&query).await;
    render(StatusCode::OK, page)
}

pub async fn order_detail_page(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    match state.dashboard.render_detail(&id).await {
        Ok(page) => render(StatusCode::OK, page),
        Err(not_found) => render(StatusCode::NOT_FOUND, not_found),
    }
}

pub async fn change_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(form): Form<StatusForm>,
) -> Redirect {
    // The outcome is reported through the toast on the next render.
    if let Err(e) = state.dashboard.update_status(&id, &form.status).await {
        warn!("Status change for {id} failed: {e}");
    }
    Redirect::to(ORDERS_PAGE)
}

pub async fn refresh(State(state): State<Arc<AppState>>) -> Redirect {
    if let Err(e) = state.dashboard.load().await {
        warn!("Manual refresh failed: {e}");
    }
    Redirect::to(ORDERS_PAGE)
}

pub async fn toggle_auto_refresh(State(state): State<Arc<AppState>>) -> Redirect {
    state.dashboard.toggle_auto_refresh().await;
    Redirect::to(ORDERS_PAGE)
}

pub async fn acknowledge_new_orders(State(state): State<Arc<AppState>>) -> Redirect {
    if let Err(e) = state.dashboard.acknowledge_new_orders().await {
        warn!("Reload after acknowledging new orders failed: {e}");
    }
    Redirect::to(ORDERS_PAGE)
}

pub async fn test_sound(State(state): State<Arc<AppState>>) -> Redirect {
    state.dashboard.test_sound().await;
    Redirect::to(ORDERS_PAGE)
}

pub fn dashboard_routes(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/dashboard/orders", get(orders_page))
        .route("/dashboard/orders/{id}", get(order_detail_page))
        .route("/dashboard/orders/{id}/status", post(change_status))
        .route("/dashboard/refresh", post(refresh))
        .route("/dashboard/auto-refresh", post(toggle_auto_refresh))
        .route(
            "/dashboard/new-orders/acknowledge",
            post(acknowledge_new_orders),
        )
        .route("/dashboard/test-sound", post(test_sound))
        .with_state(app_state)
}
