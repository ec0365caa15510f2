mod order;

pub use self::order::{
    CustomerResponse, MenuItemRef, OrderItemResponse, OrderListResponse, OrderResponse,
    SuccessResponse,
};
