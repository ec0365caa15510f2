use crate::{
    abstract_trait::{DynOrderCommandService, DynOrderQueryService},
    config::ConnectionPool,
    repository::{OrderCommandRepository, OrderQueryRepository},
    service::{OrderCommandService, OrderQueryService},
};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub order_query: DynOrderQueryService,
    pub order_command: DynOrderCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("order_query", &"<OrderQueryService>")
            .field("order_command", &"<OrderCommandService>")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, registry: &mut Registry) -> Self {
        let query_repo = Arc::new(OrderQueryRepository::new(pool.clone()));
        let command_repo = Arc::new(OrderCommandRepository::new(pool));

        let order_query: DynOrderQueryService =
            Arc::new(OrderQueryService::new(query_repo, registry));
        let order_command: DynOrderCommandService =
            Arc::new(OrderCommandService::new(command_repo, registry));

        Self {
            order_query,
            order_command,
        }
    }

    /// Wires already-built services, e.g. in-memory ones.
    pub fn from_services(
        order_query: DynOrderQueryService,
        order_command: DynOrderCommandService,
    ) -> Self {
        Self {
            order_query,
            order_command,
        }
    }
}
