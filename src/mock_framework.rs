//! # Mock Framework
//!
//! Utilities for testing code that talks to the inventory actor without
//! spawning one.
//!
//! Use [`create_mock_client`] to get a client and the receiving end of its
//! channel, then [`expect_request`] to pull each request and answer it by hand.

use tokio::sync::mpsc;

use crate::clients::InventoryClient;
use crate::inventory_actor::InventoryRequest;

/// Creates a client whose requests land on the returned receiver.
pub fn create_mock_client(buffer_size: usize) -> (InventoryClient, mpsc::Receiver<InventoryRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (InventoryClient::new(sender), receiver)
}

/// Waits for the next request, or `None` once every client is gone.
pub async fn expect_request(receiver: &mut mpsc::Receiver<InventoryRequest>) -> Option<InventoryRequest> {
    receiver.recv().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client_sees_shutdown() {
        let (client, mut receiver) = create_mock_client(2);

        client.shutdown().await.unwrap();
        drop(client);

        assert!(matches!(expect_request(&mut receiver).await, Some(InventoryRequest::Shutdown)));
        assert!(expect_request(&mut receiver).await.is_none());
    }
}
