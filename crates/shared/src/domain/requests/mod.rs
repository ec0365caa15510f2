mod order;

pub use self::order::{REQUIRED_FIELDS_MESSAGE, UpdateOrderStatusRequest};
