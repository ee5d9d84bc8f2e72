//! System orchestration, configuration, seeding and startup/shutdown.
pub mod config;
pub mod dashboard_system;
pub mod seed;
pub mod telemetry;

pub use config::*;
pub use dashboard_system::*;
pub use seed::*;
pub use telemetry::*;
