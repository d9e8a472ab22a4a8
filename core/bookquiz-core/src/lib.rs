pub mod config;
pub mod content;
pub mod metrics;
pub mod models;
pub mod services;
pub mod storage;
pub mod telemetry;
pub mod utils;

pub use config::Config;
pub use services::AppState;
