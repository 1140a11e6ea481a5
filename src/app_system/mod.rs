//! System configuration, startup, and shutdown logic.

pub mod settings;
pub mod inventory_system;
pub mod telemetry;

pub use settings::*;
pub use inventory_system::*;
pub use telemetry::*;
