pub mod logging;
pub mod metrics;

pub use logging::init_tracing;
pub use self::metrics::{init_metrics, render_metrics, spawn_upkeep, DEFAULT_UPKEEP_INTERVAL};
