//! Single-writer actor that owns the inventory and serializes every operation on it.

mod actor;
mod messages;

pub use actor::*;
pub use messages::*;
