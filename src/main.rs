mod app_system;
mod clients;
mod domain;
mod error;
mod inventory;
mod inventory_actor;
mod menu;

#[cfg(test)]
mod mock_framework;

use tracing::{error, info};

use crate::app_system::{setup_tracing, AppConfig, InventorySystem};
use crate::menu::Menu;

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = AppConfig::load().map_err(|e| format!("Invalid configuration: {e}"))?;
    setup_tracing(&config.log_filter);

    info!(shop = %config.shop_name, "Starting inventory manager");

    let system = InventorySystem::start(&config);

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut menu = Menu::new(
        system.inventory_client.clone(),
        config.shop_name.clone(),
        stdin,
        std::io::stdout(),
    );
    let outcome = menu.run().await;
    drop(menu);

    if let Err(e) = &outcome {
        error!(error = %e, "Menu stopped unexpectedly");
    }

    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Inventory manager finished");
    outcome.map_err(|e| e.to_string())
}
