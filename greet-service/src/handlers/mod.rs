pub mod greet;
pub mod health;
pub mod metrics;

pub use greet::greet;
pub use health::health_check;
pub use metrics::metrics_endpoint;
