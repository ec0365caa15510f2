#![allow(dead_code)]

use async_trait::async_trait;
use axum::{Router, body::Body, http::Response};
use chrono::{Duration as ChronoDuration, TimeZone, Utc};
use order_dashboard::{
    dashboard::{DynNotifier, Notifier},
    handler::AppRouter,
    state::AppState,
};
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::{OrderCommandRepositoryTrait, OrderQueryRepositoryTrait},
    config::Config,
    di::DependenciesInject,
    errors::RepositoryError,
    model::{OrderItemRecord, OrderRecord},
    service::{OrderCommandService, OrderQueryService},
};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use tokio::sync::Notify;
use uuid::Uuid;

/// Holds the next `find_all` between reading its rows and returning them.
#[derive(Default)]
pub struct FetchGate {
    pub entered: Notify,
    pub release: Notify,
}

#[derive(Default)]
pub struct FakeOrderStore {
    orders: Mutex<Vec<OrderRecord>>,
    gate: Mutex<Option<Arc<FetchGate>>>,
    items: Mutex<Vec<OrderItemRecord>>,
    failure: Mutex<Option<String>>,
    pub item_queries: AtomicUsize,
    pub updates: Mutex<Vec<(String, String)>>,
    pub rows_affected: Mutex<u64>,
}

impl FakeOrderStore {
    pub fn with_orders(n: usize) -> Arc<Self> {
        let store = Arc::new(Self::default());
        store.set_orders(n);
        *store.rows_affected.lock().unwrap() = 1;
        store
    }

    /// Replaces the stored orders with `n` generated ones, newest first.
    pub fn set_orders(&self, n: usize) {
        let orders = (0..n)
            .map(|i| order_record(i, &format!("Customer {i}"), "pending"))
            .collect();
        *self.orders.lock().unwrap() = orders;
    }

    pub fn push_order(&self, record: OrderRecord) {
        self.orders.lock().unwrap().insert(0, record);
    }

    pub fn push_item(&self, record: OrderItemRecord) {
        self.items.lock().unwrap().push(record);
    }

    /// Gates the next `find_all` only.
    pub fn gate_next_fetch(&self) -> Arc<FetchGate> {
        let gate = Arc::new(FetchGate::default());
        *self.gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    fn failure(&self) -> Result<(), RepositoryError> {
        match self.failure.lock().unwrap().clone() {
            Some(message) => Err(RepositoryError::Custom(message)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for FakeOrderStore {
    async fn find_all(&self) -> Result<Vec<OrderRecord>, RepositoryError> {
        self.failure()?;
        let orders = self.orders.lock().unwrap().clone();

        let gate = self.gate.lock().unwrap().take();
        if let Some(gate) = gate {
            gate.entered.notify_one();
            gate.release.notified().await;
        }

        Ok(orders)
    }

    async fn find_items_by_orders(
        &self,
        order_ids: &[Uuid],
    ) -> Result<Vec<OrderItemRecord>, RepositoryError> {
        self.item_queries.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|item| order_ids.contains(&item.order_id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for FakeOrderStore {
    async fn update_status(&self, order_id: &str, status: &str) -> Result<u64, RepositoryError> {
        self.updates
            .lock()
            .unwrap()
            .push((order_id.to_string(), status.to_string()));
        self.failure()?;
        Ok(*self.rows_affected.lock().unwrap())
    }
}

#[derive(Default)]
pub struct CountingBell {
    rings: AtomicUsize,
}

impl CountingBell {
    pub fn rings(&self) -> usize {
        self.rings.load(Ordering::SeqCst)
    }
}

impl Notifier for CountingBell {
    fn ring(&self) {
        self.rings.fetch_add(1, Ordering::SeqCst);
    }
}

pub struct TestApp {
    pub store: Arc<FakeOrderStore>,
    pub bell: Arc<CountingBell>,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub fn new(store: Arc<FakeOrderStore>) -> Self {
        let mut registry = Registry::default();
        let order_query = Arc::new(OrderQueryService::new(store.clone(), &mut registry));
        let order_command = Arc::new(OrderCommandService::new(store.clone(), &mut registry));
        let di_container = DependenciesInject::from_services(order_query, order_command);

        let config = Config::from_lookup(|_| None).unwrap();
        let bell = Arc::new(CountingBell::default());
        let notifier: DynNotifier = bell.clone();

        let state = Arc::new(AppState::with_container(
            di_container,
            &config,
            notifier,
            registry,
        ));

        Self { store, bell, state }
    }

    pub fn router(&self) -> Router {
        AppRouter::build(self.state.clone())
    }
}

pub fn order_id(i: usize) -> Uuid {
    Uuid::from_u128(0x5d0c7a0e_3b7f_4b8e_9a51_000000000000 + i as u128)
}

pub fn order_record(i: usize, name: &str, status: &str) -> OrderRecord {
    let base = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    OrderRecord {
        id: order_id(i),
        customer_id: Some(Uuid::from_u128(i as u128 + 1)),
        status: status.to_string(),
        subtotal: Some(20.0),
        discount_amount: Some(0.0),
        total: Some(20.0),
        delivery_address: Some("Jl. Merdeka 1".into()),
        notes: None,
        created_at: base - ChronoDuration::minutes(i as i64),
        updated_at: None,
        customer_ref: Some(Uuid::from_u128(i as u128 + 1)),
        customer_name: Some(name.to_string()),
        customer_email: Some(format!("customer{i}@example.com")),
        customer_phone: None,
    }
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}
