mod logs;
mod metrics;
mod otel;
mod price;
mod shutdown;

pub use self::logs::init_logger;
pub use self::metrics::{Labels, Method, Metrics, Status};
pub use self::otel::Telemetry;
pub use self::price::PriceFormat;
pub use self::shutdown::shutdown_signal;
