mod order;

pub use self::order::{OrderCommandService, OrderQueryService};
