use thiserror::Error;

use crate::domain::DisplayId;

/// Errors that can occur during inventory operations.
///
/// Out-of-range prices and quantities are not errors; they are stored as given.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    #[error("Product not found: {0}")]
    NotFound(DisplayId),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

/// Errors that end the interactive menu.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Inventory(#[from] InventoryError),
}
