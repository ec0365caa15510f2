pub mod requests;
pub mod responses;
mod status;

pub use self::status::OrderStatus;
