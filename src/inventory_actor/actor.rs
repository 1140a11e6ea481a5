use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

use super::messages::{InventoryRequest, ServiceResponse};
use crate::clients::InventoryClient;
use crate::domain::{DisplayId, NewProduct, Product};
use crate::error::InventoryError;
use crate::inventory::Inventory;

/// Owns the [`Inventory`] and applies requests one at a time, so a mutation
/// never overlaps a lookup or an aggregate.
pub struct InventoryActor {
    receiver: mpsc::Receiver<InventoryRequest>,
    inventory: Inventory,
}

impl InventoryActor {
    pub fn new(buffer_size: usize, inventory: Inventory) -> (Self, InventoryClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, inventory };
        let client = InventoryClient::new(sender);
        (actor, client)
    }

    /// Runs until a `Shutdown` request arrives or every client is dropped.
    #[instrument(name = "inventory_actor", skip(self))]
    pub async fn run(mut self) {
        info!("InventoryActor starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                InventoryRequest::CreateProduct { product, respond_to } => {
                    self.handle_create_product(product, respond_to);
                }
                InventoryRequest::GetProduct { id, respond_to } => {
                    self.handle_get_product(id, respond_to);
                }
                InventoryRequest::FindProductsByName { name, respond_to } => {
                    self.handle_find_products_by_name(name, respond_to);
                }
                InventoryRequest::UpdatePrice { id, price, respond_to } => {
                    self.handle_update_price(id, price, respond_to);
                }
                InventoryRequest::UpdateQuantity { id, quantity, respond_to } => {
                    self.handle_update_quantity(id, quantity, respond_to);
                }
                InventoryRequest::DeleteProduct { id, respond_to } => {
                    self.handle_delete_product(id, respond_to);
                }
                InventoryRequest::AveragePrice { respond_to } => {
                    let _ = respond_to.send(Ok(self.inventory.average_price()));
                }
                InventoryRequest::AveragePriceByIds { ids, respond_to } => {
                    let _ = respond_to.send(Ok(self.inventory.average_price_by_ids(&ids)));
                }
                InventoryRequest::AveragePriceByDistinctIds { ids, respond_to } => {
                    let _ = respond_to.send(Ok(self.inventory.average_price_by_distinct_ids(&ids)));
                }
                InventoryRequest::ListProducts { respond_to } => {
                    let _ = respond_to.send(Ok(self.inventory.products().to_vec()));
                }
                InventoryRequest::Shutdown => {
                    info!("InventoryActor shutting down");
                    break;
                }
            }
        }

        info!(products = self.inventory.len(), "InventoryActor stopped");
    }

    #[instrument(fields(product_name = %product.name), skip(self, product, respond_to))]
    fn handle_create_product(
        &mut self,
        product: NewProduct,
        respond_to: ServiceResponse<Product, InventoryError>,
    ) {
        debug!("Processing create_product request");
        let created = self.inventory.add(product).clone();
        info!(product_id = %created.display_id(), "Product created");
        let _ = respond_to.send(Ok(created));
    }

    #[instrument(fields(product_id = %id), skip(self, respond_to))]
    fn handle_get_product(&self, id: DisplayId, respond_to: ServiceResponse<Product, InventoryError>) {
        debug!("Processing get_product request");
        let result = self.inventory.find_by_id(id).cloned();
        if result.is_err() {
            debug!("Product not found");
        }
        let _ = respond_to.send(result);
    }

    #[instrument(fields(product_name = %name), skip(self, name, respond_to))]
    fn handle_find_products_by_name(
        &self,
        name: String,
        respond_to: ServiceResponse<Vec<Product>, InventoryError>,
    ) {
        debug!("Processing find_products_by_name request");
        let found: Vec<Product> = self
            .inventory
            .find_all_by_name(&name)
            .into_iter()
            .cloned()
            .collect();
        debug!(matches = found.len(), "Name search finished");
        let _ = respond_to.send(Ok(found));
    }

    #[instrument(fields(product_id = %id), skip(self, respond_to))]
    fn handle_update_price(&mut self, id: DisplayId, price: f64, respond_to: ServiceResponse<(), InventoryError>) {
        let result = self.inventory.update_price_by_id(id, price);
        match &result {
            Ok(()) => info!("Price updated"),
            Err(e) => debug!(error = %e, "Price not updated"),
        }
        let _ = respond_to.send(result);
    }

    #[instrument(fields(product_id = %id), skip(self, respond_to))]
    fn handle_update_quantity(
        &mut self,
        id: DisplayId,
        quantity: i64,
        respond_to: ServiceResponse<(), InventoryError>,
    ) {
        let result = self.inventory.update_quantity_by_id(id, quantity);
        match &result {
            Ok(()) => info!("Quantity updated"),
            Err(e) => debug!(error = %e, "Quantity not updated"),
        }
        let _ = respond_to.send(result);
    }

    #[instrument(fields(product_id = %id), skip(self, respond_to))]
    fn handle_delete_product(&mut self, id: DisplayId, respond_to: ServiceResponse<Product, InventoryError>) {
        let result = self.inventory.delete_by_id(id);
        match &result {
            Ok(product) => info!(product_name = %product.name, "Product deleted"),
            Err(e) => debug!(error = %e, "Product not deleted"),
        }
        let _ = respond_to.send(result);
    }
}
