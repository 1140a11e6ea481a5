pub mod ids;
pub mod product;

pub use ids::*;
pub use product::*;
