use shared::domain::responses::OrderResponse;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// One-shot message shown on the next render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Info,
            message: message.into(),
        }
    }
}

/// Growth detected by a silent poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewOrders {
    pub count: usize,
}

impl NewOrders {
    pub fn message(&self) -> String {
        format!("{} received!", self.label())
    }

    pub fn label(&self) -> String {
        let plural = if self.count > 1 { "s" } else { "" };
        format!("{} new order{plural}", self.count)
    }
}

/// In-memory state of the single dashboard session.
#[derive(Debug)]
pub struct DashboardSession {
    orders: Vec<OrderResponse>,
    last_order_count: Option<usize>,
    new_orders_count: usize,
    auto_refresh: bool,
    toast: Option<Toast>,
}

impl Default for DashboardSession {
    fn default() -> Self {
        Self {
            orders: Vec::new(),
            last_order_count: None,
            new_orders_count: 0,
            auto_refresh: true,
            toast: None,
        }
    }
}

impl DashboardSession {
    pub fn orders(&self) -> &[OrderResponse] {
        &self.orders
    }

    pub fn find(&self, id: Uuid) -> Option<&OrderResponse> {
        self.orders.iter().find(|order| order.id == id)
    }

    pub fn last_order_count(&self) -> Option<usize> {
        self.last_order_count
    }

    pub fn new_orders_count(&self) -> usize {
        self.new_orders_count
    }

    pub fn auto_refresh(&self) -> bool {
        self.auto_refresh
    }

    /// Full load: replaces the list and resets the baseline without notifying.
    pub fn replace_orders(&mut self, orders: Vec<OrderResponse>) {
        self.last_order_count = Some(orders.len());
        self.orders = orders;
    }

    /// Silent poll: replaces the list and reports growth over the baseline.
    ///
    /// Only a strictly larger count counts as growth, and only once a baseline
    /// exists. The comparison is by count alone, so an arrival that coincides
    /// with a removal goes unnoticed.
    pub fn apply_poll(&mut self, orders: Vec<OrderResponse>) -> Option<NewOrders> {
        let outcome = match self.last_order_count {
            Some(previous) if orders.len() > previous => Some(NewOrders {
                count: orders.len() - previous,
            }),
            _ => None,
        };

        if let Some(new_orders) = outcome {
            self.new_orders_count = new_orders.count;
            self.toast = Some(Toast::success(new_orders.message()));
        }

        self.replace_orders(orders);
        outcome
    }

    pub fn acknowledge_new_orders(&mut self) {
        self.new_orders_count = 0;
    }

    pub fn toggle_auto_refresh(&mut self) -> bool {
        self.auto_refresh = !self.auto_refresh;
        self.auto_refresh
    }

    pub fn set_toast(&mut self, toast: Toast) {
        self.toast = Some(toast);
    }

    pub fn take_toast(&mut self) -> Option<Toast> {
        self.toast.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn orders(n: usize) -> Vec<OrderResponse> {
        (0..n)
            .map(|_| OrderResponse {
                id: Uuid::new_v4(),
                customer_id: None,
                status: "pending".into(),
                subtotal: None,
                discount_amount: None,
                total: None,
                delivery_address: None,
                notes: None,
                created_at: Utc::now(),
                updated_at: None,
                customer: None,
                order_items: vec![],
            })
            .collect()
    }

    #[test]
    fn growth_reports_the_difference_once() {
        let mut session = DashboardSession::default();
        session.replace_orders(orders(3));

        assert_eq!(session.apply_poll(orders(5)), Some(NewOrders { count: 2 }));
        assert_eq!(session.new_orders_count(), 2);
        assert_eq!(session.last_order_count(), Some(5));

        // Same count again: the baseline moved, so nothing new.
        assert_eq!(session.apply_poll(orders(5)), None);
    }

    #[test]
    fn equal_or_smaller_counts_do_not_notify() {
        let mut session = DashboardSession::default();
        session.replace_orders(orders(4));

        assert_eq!(session.apply_poll(orders(4)), None);
        assert_eq!(session.apply_poll(orders(2)), None);
        assert_eq!(session.last_order_count(), Some(2));
        assert!(session.take_toast().is_none());
    }

    #[test]
    fn first_poll_without_baseline_only_sets_it() {
        let mut session = DashboardSession::default();

        assert_eq!(session.apply_poll(orders(7)), None);
        assert_eq!(session.last_order_count(), Some(7));
    }

    #[test]
    fn growth_from_an_empty_baseline_notifies() {
        let mut session = DashboardSession::default();
        session.replace_orders(Vec::new());

        assert_eq!(session.apply_poll(orders(1)), Some(NewOrders { count: 1 }));
    }

    #[test]
    fn replace_never_notifies() {
        let mut session = DashboardSession::default();
        session.replace_orders(orders(1));
        session.replace_orders(orders(10));

        assert_eq!(session.new_orders_count(), 0);
        assert!(session.take_toast().is_none());
    }

    #[test]
    fn toast_is_taken_once() {
        let mut session = DashboardSession::default();
        session.replace_orders(orders(1));
        session.apply_poll(orders(2));

        assert_eq!(
            session.take_toast(),
            Some(Toast::success("1 new order received!"))
        );
        assert_eq!(session.take_toast(), None);
    }

    #[test]
    fn acknowledging_clears_the_banner() {
        let mut session = DashboardSession::default();
        session.replace_orders(orders(1));
        session.apply_poll(orders(4));
        session.acknowledge_new_orders();

        assert_eq!(session.new_orders_count(), 0);
    }

    #[test]
    fn labels_pluralize() {
        assert_eq!(NewOrders { count: 1 }.message(), "1 new order received!");
        assert_eq!(NewOrders { count: 3 }.label(), "3 new orders");
    }

    #[test]
    fn auto_refresh_starts_on_and_toggles() {
        let mut session = DashboardSession::default();
        assert!(session.auto_refresh());
        assert!(!session.toggle_auto_refresh());
        assert!(session.toggle_auto_refresh());
    }
}
