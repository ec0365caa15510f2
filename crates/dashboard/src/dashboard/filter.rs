use serde::Deserialize;
use shared::domain::responses::OrderResponse;

pub const ALL_STATUSES: &str = "all";

/// Query string of the order list page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(String),
}

#[derive(Debug, Clone)]
pub struct OrderFilter {
    search: String,
    needle: String,
    status: StatusFilter,
}

impl OrderFilter {
    pub fn new(search: &str, status: Option<&str>) -> Self {
        let status = match status.map(str::trim) {
            None | Some("") | Some(ALL_STATUSES) => StatusFilter::All,
            Some(status) => StatusFilter::Only(status.to_string()),
        };

        Self {
            search: search.to_string(),
            needle: search.to_lowercase(),
            status,
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn status_value(&self) -> &str {
        match &self.status {
            StatusFilter::All => ALL_STATUSES,
            StatusFilter::Only(status) => status,
        }
    }

    /// Case-insensitive match on customer name, customer email or order id,
    /// combined with an exact status match.
    pub fn matches(&self, order: &OrderResponse) -> bool {
        let contains = |value: Option<&str>| {
            value.is_some_and(|value| value.to_lowercase().contains(&self.needle))
        };

        let id = order.id.to_string();
        let matches_search = contains(order.customer_name())
            || contains(order.customer_email())
            || contains(Some(&id));

        let matches_status = match &self.status {
            StatusFilter::All => true,
            StatusFilter::Only(status) => order.status == *status,
        };

        matches_search && matches_status
    }

    pub fn apply<'a>(&self, orders: &'a [OrderResponse]) -> Vec<&'a OrderResponse> {
        orders.iter().filter(|order| self.matches(order)).collect()
    }
}

impl From<&DashboardQuery> for OrderFilter {
    fn from(query: &DashboardQuery) -> Self {
        OrderFilter::new(&query.search, query.status.as_deref())
    }
}
