use tokio::sync::oneshot;

use crate::domain::{DisplayId, NewProduct, Product};
use crate::error::InventoryError;

pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Requests understood by the inventory actor. Each carries a oneshot
/// channel for its reply; lookups reply with owned snapshots.
#[derive(Debug)]
pub enum InventoryRequest {
    CreateProduct {
        product: NewProduct,
        respond_to: ServiceResponse<Product, InventoryError>,
    },
    GetProduct {
        id: DisplayId,
        respond_to: ServiceResponse<Product, InventoryError>,
    },
    FindProductsByName {
        name: String,
        respond_to: ServiceResponse<Vec<Product>, InventoryError>,
    },
    UpdatePrice {
        id: DisplayId,
        price: f64,
        respond_to: ServiceResponse<(), InventoryError>,
    },
    UpdateQuantity {
        id: DisplayId,
        quantity: i64,
        respond_to: ServiceResponse<(), InventoryError>,
    },
    DeleteProduct {
        id: DisplayId,
        respond_to: ServiceResponse<Product, InventoryError>,
    },
    AveragePrice {
        respond_to: ServiceResponse<f64, InventoryError>,
    },
    AveragePriceByIds {
        ids: Vec<DisplayId>,
        respond_to: ServiceResponse<f64, InventoryError>,
    },
    AveragePriceByDistinctIds {
        ids: Vec<DisplayId>,
        respond_to: ServiceResponse<f64, InventoryError>,
    },
    ListProducts {
        respond_to: ServiceResponse<Vec<Product>, InventoryError>,
    },
    Shutdown,
}
