mod table;
mod throttle;

pub use table::TableError;
pub use table::TableManager;
pub use throttle::MAX_RETRY_AFTER;
pub use throttle::RateLimiter;
pub use throttle::RetryPolicy;
pub use throttle::retry_after;
