use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::domain::{DisplayId, NewProduct, Product};
use crate::error::InventoryError;
use crate::inventory_actor::InventoryRequest;

/// Client for interacting with the inventory actor. Cheap to clone.
#[derive(Clone, Debug)]
pub struct InventoryClient {
    sender: mpsc::Sender<InventoryRequest>,
}

impl InventoryClient {
    pub fn new(sender: mpsc::Sender<InventoryRequest>) -> Self {
        Self { sender }
    }

    /// Asks the actor to stop after the requests already queued.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), InventoryError> {
        debug!("Sending request");
        self.sender
            .send(InventoryRequest::Shutdown)
            .await
            .map_err(|_| InventoryError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(InventoryClient => fn create_product(product: NewProduct) -> Product as InventoryRequest::CreateProduct, Error = InventoryError);
client_method!(InventoryClient => fn get_product(id: DisplayId) -> Product as InventoryRequest::GetProduct, Error = InventoryError);
client_method!(InventoryClient => fn find_products_by_name(name: String) -> Vec<Product> as InventoryRequest::FindProductsByName, Error = InventoryError);
client_method!(InventoryClient => fn update_price(id: DisplayId, price: f64) -> () as InventoryRequest::UpdatePrice, Error = InventoryError);
client_method!(InventoryClient => fn update_quantity(id: DisplayId, quantity: i64) -> () as InventoryRequest::UpdateQuantity, Error = InventoryError);
client_method!(InventoryClient => fn delete_product(id: DisplayId) -> Product as InventoryRequest::DeleteProduct, Error = InventoryError);
client_method!(InventoryClient => fn average_price() -> f64 as InventoryRequest::AveragePrice, Error = InventoryError);
client_method!(InventoryClient => fn average_price_by_ids(ids: Vec<DisplayId>) -> f64 as InventoryRequest::AveragePriceByIds, Error = InventoryError);
client_method!(InventoryClient => fn average_price_by_distinct_ids(ids: Vec<DisplayId>) -> f64 as InventoryRequest::AveragePriceByDistinctIds, Error = InventoryError);
client_method!(InventoryClient => fn list_products() -> Vec<Product> as InventoryRequest::ListProducts, Error = InventoryError);
