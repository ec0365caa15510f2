mod order;
mod order_item;

pub use self::order::OrderRecord;
pub use self::order_item::OrderItemRecord;
