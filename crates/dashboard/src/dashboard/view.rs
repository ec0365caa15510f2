use crate::dashboard::{
    filter::OrderFilter,
    session::{NewOrders, Toast, ToastKind},
};
use askama::Template;
use shared::{
    domain::{
        OrderStatus,
        responses::{OrderItemResponse, OrderResponse},
    },
    utils::PriceFormat,
};

const GUEST: &str = "Guest";
const NO_PHONE: &str = "N/A";
const UNKNOWN_ITEM: &str = "Unknown Item";
const NO_ADDRESS: &str = "Not specified";

#[derive(Debug, Clone)]
pub struct ToastView {
    pub class: &'static str,
    pub message: String,
}

impl From<Toast> for ToastView {
    fn from(toast: Toast) -> Self {
        let class = match toast.kind {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
            ToastKind::Info => "toast toast-info",
        };

        Self {
            class,
            message: toast.message,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatusOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

impl StatusOption {
    /// Every known status, marking `current` as selected.
    pub fn all(current: &str) -> Vec<StatusOption> {
        OrderStatus::ALL
            .into_iter()
            .map(|status| StatusOption {
                value: status.as_str(),
                label: status.label(),
                selected: status.as_str() == current,
            })
            .collect()
    }

    /// Filter choices: "All Status" followed by every known status.
    pub fn filter(current: &str) -> Vec<StatusOption> {
        let mut options = vec![StatusOption {
            value: "all",
            label: "All Status",
            selected: current == "all",
        }];
        options.extend(StatusOption::all(current));
        options
    }
}

#[derive(Debug, Clone)]
pub struct OrderRowView {
    pub id: String,
    pub short_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub item_count: usize,
    pub total: String,
    pub status: String,
    pub badge_class: &'static str,
    pub status_options: Vec<StatusOption>,
    pub created_at: String,
}

impl OrderRowView {
    pub fn new(order: &OrderResponse, price: &PriceFormat) -> Self {
        Self {
            id: order.id.to_string(),
            short_id: order.short_id(),
            customer_name: customer_name(order),
            customer_email: order.customer_email().unwrap_or_default().to_string(),
            item_count: order.order_items.len(),
            total: price.format(order.total.unwrap_or_default()),
            status: order.status.clone(),
            badge_class: OrderStatus::badge_class(&order.status),
            status_options: StatusOption::all(&order.status),
            created_at: order.created_at.format("%Y-%m-%d").to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ItemView {
    pub quantity: i32,
    pub name: String,
    pub total_price: String,
}

impl ItemView {
    pub fn new(item: &OrderItemResponse, price: &PriceFormat) -> Self {
        let name = item
            .menu_item
            .as_ref()
            .and_then(|menu_item| menu_item.name.as_deref())
            .filter(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_ITEM);

        Self {
            quantity: item.quantity,
            name: name.to_string(),
            total_price: price.format(item.total_price.unwrap_or_default()),
        }
    }
}

#[derive(Template)]
#[template(path = "orders.html")]
pub struct OrdersPage {
    pub rows: Vec<OrderRowView>,
    pub search: String,
    pub status_options: Vec<StatusOption>,
    pub new_orders: Option<String>,
    pub auto_refresh: bool,
    pub refresh_secs: u64,
    pub toast: Option<ToastView>,
}

/// Inputs of the order list page besides the orders themselves.
pub struct OrdersPageContext<'a> {
    pub filter: &'a OrderFilter,
    pub new_orders_count: usize,
    pub auto_refresh: bool,
    pub refresh_secs: u64,
    pub toast: Option<Toast>,
    pub price: &'a PriceFormat,
}

impl OrdersPage {
    pub fn build(orders: &[OrderResponse], ctx: OrdersPageContext<'_>) -> Self {
        let rows = ctx
            .filter
            .apply(orders)
            .into_iter()
            .map(|order| OrderRowView::new(order, ctx.price))
            .collect();

        let new_orders = (ctx.new_orders_count > 0).then(|| {
            NewOrders {
                count: ctx.new_orders_count,
            }
            .label()
        });

        Self {
            rows,
            search: ctx.filter.search().to_string(),
            status_options: StatusOption::filter(ctx.filter.status_value()),
            new_orders,
            auto_refresh: ctx.auto_refresh,
            refresh_secs: ctx.refresh_secs,
            toast: ctx.toast.map(ToastView::from),
        }
    }
}

#[derive(Template)]
#[template(path = "order_detail.html")]
pub struct OrderDetailPage {
    pub id: String,
    pub short_id: String,
    pub status: String,
    pub badge_class: &'static str,
    pub status_options: Vec<StatusOption>,
    pub items: Vec<ItemView>,
    pub subtotal: String,
    pub discount: Option<String>,
    pub total: String,
    pub customer_initial: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub delivery_address: String,
    pub notes: Option<String>,
    pub created_at: String,
    pub auto_refresh: bool,
    pub refresh_secs: u64,
    pub toast: Option<ToastView>,
}

impl OrderDetailPage {
    pub fn build(
        order: &OrderResponse,
        price: &PriceFormat,
        auto_refresh: bool,
        refresh_secs: u64,
        toast: Option<Toast>,
    ) -> Self {
        let discount = order
            .discount_amount
            .filter(|amount| *amount > 0.0)
            .map(|amount| format!("-{}", price.format(amount)));

        let customer_initial = order
            .customer_name()
            .and_then(|name| name.chars().next())
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "C".to_string());

        Self {
            id: order.id.to_string(),
            short_id: order.short_id(),
            status: order.status.clone(),
            badge_class: OrderStatus::badge_class(&order.status),
            status_options: StatusOption::all(&order.status),
            items: order
                .order_items
                .iter()
                .map(|item| ItemView::new(item, price))
                .collect(),
            subtotal: price.format(order.subtotal.unwrap_or_default()),
            discount,
            total: price.format(order.total.unwrap_or_default()),
            customer_initial,
            customer_name: customer_name(order),
            customer_email: order.customer_email().unwrap_or_default().to_string(),
            customer_phone: order
                .customer_phone()
                .filter(|phone| !phone.is_empty())
                .unwrap_or(NO_PHONE)
                .to_string(),
            delivery_address: order
                .delivery_address
                .as_deref()
                .filter(|address| !address.is_empty())
                .unwrap_or(NO_ADDRESS)
                .to_string(),
            notes: order.notes.clone().filter(|notes| !notes.is_empty()),
            created_at: order.created_at.format("%Y-%m-%d %H:%M").to_string(),
            auto_refresh,
            refresh_secs,
            toast: toast.map(ToastView::from),
        }
    }
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundPage {
    pub id: String,
    pub auto_refresh: bool,
    pub refresh_secs: u64,
    pub toast: Option<ToastView>,
}

fn customer_name(order: &OrderResponse) -> String {
    order
        .customer_name()
        .filter(|name| !name.is_empty())
        .unwrap_or(GUEST)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use shared::domain::responses::{CustomerResponse, MenuItemRef};
    use uuid::Uuid;

    fn order() -> OrderResponse {
        let id = Uuid::parse_str("5d0c7a0e-3b7f-4b8e-9a51-2f7c1f0a9b11").unwrap();
        OrderResponse {
            id,
            customer_id: None,
            status: "preparing".into(),
            subtotal: Some(25.0),
            discount_amount: Some(0.0),
            total: Some(1250.5),
            delivery_address: None,
            notes: Some(String::new()),
            created_at: Utc.with_ymd_and_hms(2024, 3, 9, 18, 30, 0).unwrap(),
            updated_at: None,
            customer: None,
            order_items: vec![
                OrderItemResponse {
                    id: Uuid::new_v4(),
                    order_id: id,
                    menu_item_id: None,
                    quantity: 2,
                    unit_price: Some(5.0),
                    total_price: Some(10.0),
                    menu_item: None,
                },
                OrderItemResponse {
                    id: Uuid::new_v4(),
                    order_id: id,
                    menu_item_id: None,
                    quantity: 1,
                    unit_price: Some(15.0),
                    total_price: Some(15.0),
                    menu_item: Some(MenuItemRef {
                        name: Some("Nasi Goreng".into()),
                    }),
                },
            ],
        }
    }

    #[test]
    fn row_uses_fallbacks_and_short_id() {
        let row = OrderRowView::new(&order(), &PriceFormat::default());

        assert_eq!(row.short_id, "1F0A9B11");
        assert_eq!(row.customer_name, GUEST);
        assert_eq!(row.customer_email, "");
        assert_eq!(row.item_count, 2);
        assert_eq!(row.total, "$1,250.50");
        assert_eq!(row.badge_class, "badge badge-preparing");
        assert_eq!(row.created_at, "2024-03-09");
        assert!(
            row.status_options
                .iter()
                .any(|o| o.value == "preparing" && o.selected)
        );
    }

    #[test]
    fn detail_hides_zero_discount_and_fills_placeholders() {
        let page = OrderDetailPage::build(&order(), &PriceFormat::default(), true, 10, None);

        assert!(page.discount.is_none());
        assert!(page.notes.is_none());
        assert_eq!(page.customer_initial, "C");
        assert_eq!(page.customer_phone, NO_PHONE);
        assert_eq!(page.delivery_address, NO_ADDRESS);
        assert_eq!(page.items[0].name, UNKNOWN_ITEM);
        assert_eq!(page.items[1].name, "Nasi Goreng");
    }

    #[test]
    fn detail_shows_positive_discount_and_customer() {
        let mut o = order();
        o.discount_amount = Some(2.5);
        o.customer = Some(CustomerResponse {
            name: Some("siti".into()),
            email: Some("siti@example.com".into()),
            phone: Some("0812".into()),
        });

        let page = OrderDetailPage::build(&o, &PriceFormat::default(), false, 10, None);

        assert_eq!(page.discount.as_deref(), Some("-$2.50"));
        assert_eq!(page.customer_initial, "S");
        assert_eq!(page.customer_name, "siti");
        assert_eq!(page.customer_phone, "0812");
    }

    #[test]
    fn filter_options_start_with_all() {
        let options = StatusOption::filter("all");
        assert_eq!(options.len(), OrderStatus::ALL.len() + 1);
        assert!(options[0].selected);
        assert_eq!(options[0].label, "All Status");
    }

    #[test]
    fn orders_page_renders_banner_and_rows() {
        let filter = OrderFilter::new("", None);
        let price = PriceFormat::default();
        let page = OrdersPage::build(
            &[order()],
            OrdersPageContext {
                filter: &filter,
                new_orders_count: 2,
                auto_refresh: true,
                refresh_secs: 10,
                toast: Some(Toast::success("2 new orders received!")),
                price: &price,
            },
        );

        let html = page.render().unwrap();
        assert!(html.contains("1F0A9B11"));
        assert!(html.contains("2 new orders"));
        assert!(html.contains("2 new orders received!"));
        assert!(html.contains("http-equiv=\"refresh\""));
    }
}
