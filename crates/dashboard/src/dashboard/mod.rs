mod filter;
mod notifier;
mod session;
mod view;
mod watcher;

pub use self::filter::{ALL_STATUSES, DashboardQuery, OrderFilter, StatusFilter};
pub use self::notifier::{DynNotifier, Notifier, TerminalBell};
pub use self::session::{DashboardSession, NewOrders, Toast, ToastKind};
pub use self::view::{
    ItemView, NotFoundPage, OrderDetailPage, OrderRowView, OrdersPage, OrdersPageContext,
    StatusOption, ToastView,
};
pub use self::watcher::OrderWatcher;

use prometheus_client::{metrics::counter::Counter, registry::Registry};
use shared::{
    abstract_trait::{DynOrderCommandService, DynOrderQueryService},
    domain::requests::UpdateOrderStatusRequest,
    errors::ServiceError,
    utils::PriceFormat,
};
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

pub const STATUS_UPDATED_MESSAGE: &str = "Order status updated";
pub const TEST_SOUND_MESSAGE: &str = "Test sound played!";

/// Server-side dashboard: the order list, the new-order detector and the
/// toasts shown on the next render.
pub struct Dashboard {
    query: DynOrderQueryService,
    command: DynOrderCommandService,
    session: RwLock<DashboardSession>,
    fetching: Mutex<()>,
    notifier: DynNotifier,
    new_orders: Counter,
    price_format: PriceFormat,
    poll_interval: Duration,
}

impl Dashboard {
    pub fn new(
        query: DynOrderQueryService,
        command: DynOrderCommandService,
        notifier: DynNotifier,
        price_format: PriceFormat,
        poll_interval: Duration,
        registry: &mut Registry,
    ) -> Self {
        let new_orders = Counter::default();
        registry.register(
            "dashboard_new_orders",
            "Orders detected by the background poll",
            new_orders.clone(),
        );

        Self {
            query,
            command,
            session: RwLock::new(DashboardSession::default()),
            fetching: Mutex::new(()),
            notifier,
            new_orders,
            price_format,
            poll_interval,
        }
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    pub async fn orders_len(&self) -> usize {
        self.session.read().await.orders().len()
    }

    pub async fn new_orders_count(&self) -> usize {
        self.session.read().await.new_orders_count()
    }

    pub async fn auto_refresh(&self) -> bool {
        self.session.read().await.auto_refresh()
    }

    /// Full reload. Resets the baseline count and never notifies.
    ///
    /// Waits for an in-flight poll to be applied first, so a poll fetched
    /// before the reload can never overwrite its result.
    pub async fn load(&self) -> Result<(), ServiceError> {
        let _guard = self.fetching.lock().await;

        match self.query.find_all().await {
            Ok(orders) => {
                info!("📦 Loaded {} orders", orders.len());
                self.session.write().await.replace_orders(orders);
                Ok(())
            }
            Err(e) => {
                let message = describe(&e);
                error!("❌ Failed to fetch orders: {message}");
                self.session
                    .write()
                    .await
                    .set_toast(Toast::error(format!("Failed to fetch orders: {message}")));
                Err(e)
            }
        }
    }

    /// Silent refresh driven by the watcher. Skipped while auto-refresh is off
    /// or while another poll or reload is still in flight.
    pub async fn poll(&self) -> Option<NewOrders> {
        let Ok(_guard) = self.fetching.try_lock() else {
            debug!("Fetch already in flight, skipping poll");
            return None;
        };

        if !self.auto_refresh().await {
            return None;
        }

        let orders = match self.query.find_all().await {
            Ok(orders) => orders,
            Err(e) => {
                debug!("Background poll failed: {}", describe(&e));
                return None;
            }
        };

        let outcome = self.session.write().await.apply_poll(orders);

        if let Some(new_orders) = outcome {
            info!("🔔 {}", new_orders.message());
            self.new_orders.inc_by(new_orders.count as u64);
            self.notifier.ring();
        }

        outcome
    }

    pub async fn update_status(&self, order_id: &str, status: &str) -> Result<(), ServiceError> {
        let req = UpdateOrderStatusRequest::new(order_id, status);

        match self.command.update_status(&req).await {
            Ok(()) => {
                self.session
                    .write()
                    .await
                    .set_toast(Toast::success(STATUS_UPDATED_MESSAGE));
                // A failed reload leaves its own toast behind.
                if let Err(e) = self.load().await {
                    warn!("Reload after status update failed: {e}");
                }
                Ok(())
            }
            Err(e) => {
                let message = describe(&e);
                error!("❌ Failed to update order {order_id}: {message}");
                self.session
                    .write()
                    .await
                    .set_toast(Toast::error(format!("Failed to update order: {message}")));
                Err(e)
            }
        }
    }

    /// Flips auto-refresh and reloads, so orders that arrived while it was
    /// off become the new baseline instead of a notification.
    pub async fn toggle_auto_refresh(&self) -> bool {
        let enabled = self.session.write().await.toggle_auto_refresh();
        info!(
            "Auto-refresh {}",
            if enabled { "enabled" } else { "disabled" }
        );

        if let Err(e) = self.load().await {
            warn!("Reload after auto-refresh toggle failed: {e}");
        }

        enabled
    }

    pub async fn acknowledge_new_orders(&self) -> Result<(), ServiceError> {
        self.session.write().await.acknowledge_new_orders();
        self.load().await
    }

    pub async fn test_sound(&self) {
        self.notifier.ring();
        self.session
            .write()
            .await
            .set_toast(Toast::info(TEST_SOUND_MESSAGE));
    }

    /// Renders the list page, consuming any pending toast.
    pub async fn render_orders(&self, query: &DashboardQuery) -> OrdersPage {
        let filter = OrderFilter::from(query);
        let mut session = self.session.write().await;
        let toast = session.take_toast();

        OrdersPage::build(
            session.orders(),
            OrdersPageContext {
                filter: &filter,
                new_orders_count: session.new_orders_count(),
                auto_refresh: session.auto_refresh(),
                refresh_secs: self.poll_interval.as_secs(),
                toast,
                price: &self.price_format,
            },
        )
    }

    /// Renders the detail page of an order in the current list. Ids that are
    /// malformed or not loaded get the not-found page.
    pub async fn render_detail(&self, id: &str) -> Result<OrderDetailPage, NotFoundPage> {
        let mut session = self.session.write().await;
        let toast = session.take_toast();
        let auto_refresh = session.auto_refresh();
        let refresh_secs = self.poll_interval.as_secs();

        let order = Uuid::parse_str(id).ok().and_then(|id| session.find(id));

        match order {
            Some(order) => Ok(OrderDetailPage::build(
                order,
                &self.price_format,
                auto_refresh,
                refresh_secs,
                toast,
            )),
            None => Err(NotFoundPage {
                id: id.to_string(),
                auto_refresh,
                refresh_secs,
                toast: toast.map(ToastView::from),
            }),
        }
    }
}

fn describe(err: &ServiceError) -> String {
    match err {
        ServiceError::Repo(repo) => repo.store_message(),
        ServiceError::Validation(errors) => errors.join("; "),
        ServiceError::Internal(msg) => msg.clone(),
    }
}

