pub mod config;
pub mod handlers;
pub mod models;
pub mod startup;

pub use startup::{build_router, AppState, Application};
