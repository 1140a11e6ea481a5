use tracing::{error, info, warn};

use super::AppConfig;
use crate::clients::InventoryClient;
use crate::error::InventoryError;
use crate::inventory::Inventory;
use crate::inventory_actor::InventoryActor;

/// Starts the inventory actor and hands out its client.
pub struct InventorySystem {
    pub inventory_client: InventoryClient,
    handle: tokio::task::JoinHandle<()>,
}

impl InventorySystem {
    pub fn start(config: &AppConfig) -> Self {
        // mpsc::channel panics on a zero bound
        let capacity = config.channel_capacity.max(1);
        let (actor, inventory_client) = InventoryActor::new(capacity, Inventory::new());
        let handle = tokio::spawn(actor.run());
        info!(capacity, "Inventory system started");

        Self {
            inventory_client,
            handle,
        }
    }

    pub async fn shutdown(self) -> Result<(), InventoryError> {
        info!("Shutting down system...");

        if let Err(e) = self.inventory_client.shutdown().await {
            warn!(error = %e, "Inventory actor already stopped");
        }
        drop(self.inventory_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(InventoryError::ActorCommunicationError(format!("Actor task failed: {e}")));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewProduct;

    fn config(capacity: usize) -> AppConfig {
        AppConfig {
            shop_name: "Test".to_string(),
            channel_capacity: capacity,
            log_filter: "info".to_string(),
        }
    }

    #[tokio::test]
    async fn test_start_and_shutdown() {
        let system = InventorySystem::start(&config(0));

        let client = system.inventory_client.clone();
        let product = client
            .create_product(NewProduct::new("Rice", "Grains", 1.25, 40, "Verde", "Valle", "2027-01-01"))
            .await
            .unwrap();
        assert_eq!(product.display_id().0, 1);

        system.shutdown().await.unwrap();
        assert!(client.list_products().await.is_err());
    }
}
