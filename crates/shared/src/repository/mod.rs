mod order;

pub use self::order::{OrderCommandRepository, OrderQueryRepository};
