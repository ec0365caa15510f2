use crate::dashboard::{Dashboard, DynNotifier};
use prometheus_client::registry::Registry;
use shared::{
    config::{Config, ConnectionPool},
    di::DependenciesInject,
};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub dashboard: Arc<Dashboard>,
    pub registry: Arc<Mutex<Registry>>,
}

impl AppState {
    pub fn new(pool: ConnectionPool, config: &Config, notifier: DynNotifier) -> Self {
        let mut registry = Registry::default();
        let di_container = DependenciesInject::new(pool, &mut registry);

        Self::with_container(di_container, config, notifier, registry)
    }

    /// Builds the state around an existing container, e.g. one wired with
    /// in-memory services.
    pub fn with_container(
        di_container: DependenciesInject,
        config: &Config,
        notifier: DynNotifier,
        mut registry: Registry,
    ) -> Self {
        let dashboard = Arc::new(Dashboard::new(
            di_container.order_query.clone(),
            di_container.order_command.clone(),
            notifier,
            config.price_format.clone(),
            config.poll_interval,
            &mut registry,
        ));

        Self {
            di_container,
            dashboard,
            registry: Arc::new(Mutex::new(registry)),
        }
    }
}
