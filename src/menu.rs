//! Interactive text menu over the inventory client.
//!
//! Input is consumed one whitespace-separated token at a time, so a whole
//! product can be typed on a single line. Numbers are only coerced, never
//! range-checked.

use std::collections::VecDeque;
use std::io::Write;
use std::str::FromStr;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, instrument};

use crate::clients::InventoryClient;
use crate::domain::{DisplayId, NewProduct};
use crate::error::{InventoryError, MenuError};

enum Input<T> {
    Value(T),
    Invalid(String),
    Closed,
}

enum Flow {
    Continue,
    Exit,
}

/// Unwraps an [`Input`], or leaves the current option: back to the menu on a
/// bad number, out of the loop at end of input.
macro_rules! take_input {
    ($menu:expr, $read:expr) => {
        match $read.await? {
            Input::Value(value) => value,
            Input::Invalid(raw) => {
                $menu.say(&format!("Invalid number: {}", raw))?;
                return Ok(Flow::Continue);
            }
            Input::Closed => return Ok(Flow::Exit),
        }
    };
}

pub struct Menu<R, W> {
    client: InventoryClient,
    shop_name: String,
    input: R,
    pending: VecDeque<String>,
    output: W,
}

impl<R, W> Menu<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(client: InventoryClient, shop_name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            client,
            shop_name: shop_name.into(),
            input,
            pending: VecDeque::new(),
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Shows the menu until the operator picks `0` or input ends.
    #[instrument(name = "menu", skip(self))]
    pub async fn run(&mut self) -> Result<(), MenuError> {
        loop {
            self.print_options()?;
            let choice = match self.read::<i64>("Select an option: ").await? {
                Input::Value(choice) => choice,
                Input::Invalid(raw) => {
                    debug!(input = %raw, "Unreadable option");
                    self.say("Invalid option. Try again.")?;
                    continue;
                }
                Input::Closed => break,
            };
            debug!(choice, "Menu option selected");

            let flow = match choice {
                1 => self.add_product().await?,
                2 => self.show_by_id().await?,
                3 => self.show_by_name().await?,
                4 => self.update_price().await?,
                5 => self.update_quantity().await?,
                6 => self.delete_product().await?,
                7 => self.average_price().await?,
                8 => self.average_price_by_ids().await?,
                0 => Flow::Exit,
                _ => {
                    self.say("Invalid option. Try again.")?;
                    Flow::Continue
                }
            };
            if let Flow::Exit = flow {
                break;
            }
        }

        self.say("Exiting the program.")?;
        Ok(())
    }

    fn print_options(&mut self) -> Result<(), MenuError> {
        let banner = format!("===== {} =====", self.shop_name);
        self.say(&banner)?;
        for line in [
            "1. Add product",
            "2. Show product by ID",
            "3. Show products by name",
            "4. Update price",
            "5. Update quantity",
            "6. Delete product",
            "7. Average price of all products",
            "8. Average price by IDs",
            "0. Exit",
        ] {
            self.say(line)?;
        }
        Ok(())
    }

    async fn add_product(&mut self) -> Result<Flow, MenuError> {
        let name = take_input!(self, self.read::<String>("Product name: "));
        let category = take_input!(self, self.read::<String>("Category: "));
        let price = take_input!(self, self.read::<f64>("Price: $"));
        let quantity = take_input!(self, self.read::<i64>("Quantity: "));
        let brand = take_input!(self, self.read::<String>("Brand: "));
        let supplier = take_input!(self, self.read::<String>("Supplier: "));
        let expiration_date = take_input!(self, self.read::<String>("Expiration date: "));

        let payload = NewProduct {
            name,
            category,
            price,
            quantity,
            brand,
            supplier,
            expiration_date,
        };
        let product = self.client.create_product(payload).await?;
        self.say(&format!("Product added with ID {}", product.display_id()))?;
        Ok(Flow::Continue)
    }

    async fn show_by_id(&mut self) -> Result<Flow, MenuError> {
        let id = DisplayId(take_input!(self, self.read::<i64>("Enter the product ID: ")));
        match self.client.get_product(id).await {
            Ok(product) => self.say(&product.describe())?,
            Err(InventoryError::NotFound(_)) => self.say("Product not found.")?,
            Err(e) => return Err(e.into()),
        }
        Ok(Flow::Continue)
    }

    async fn show_by_name(&mut self) -> Result<Flow, MenuError> {
        let name = take_input!(self, self.read::<String>("Enter the product name: "));
        let found = self.client.find_products_by_name(name.clone()).await?;
        if found.is_empty() {
            self.say("No products found with that name.")?;
        } else {
            self.say(&format!("Products named '{}':", name))?;
            for product in &found {
                self.say(&product.describe_name_first())?;
            }
        }
        Ok(Flow::Continue)
    }

    async fn update_price(&mut self) -> Result<Flow, MenuError> {
        let id = DisplayId(take_input!(self, self.read::<i64>("Enter the product ID: ")));
        if !self.exists(id).await? {
            self.say("Product not found.")?;
            return Ok(Flow::Continue);
        }
        let price = take_input!(self, self.read::<f64>("Enter the new price: $"));
        match self.client.update_price(id, price).await {
            Ok(()) => self.say("Price updated successfully.")?,
            Err(InventoryError::NotFound(_)) => self.say("Product not found.")?,
            Err(e) => return Err(e.into()),
        }
        Ok(Flow::Continue)
    }

    async fn update_quantity(&mut self) -> Result<Flow, MenuError> {
        let id = DisplayId(take_input!(self, self.read::<i64>("Enter the product ID: ")));
        if !self.exists(id).await? {
            self.say("Product not found.")?;
            return Ok(Flow::Continue);
        }
        let quantity = take_input!(self, self.read::<i64>("Enter the new quantity: "));
        match self.client.update_quantity(id, quantity).await {
            Ok(()) => self.say("Quantity updated successfully.")?,
            Err(InventoryError::NotFound(_)) => self.say("Product not found.")?,
            Err(e) => return Err(e.into()),
        }
        Ok(Flow::Continue)
    }

    async fn delete_product(&mut self) -> Result<Flow, MenuError> {
        let id = DisplayId(take_input!(self, self.read::<i64>("Enter the ID of the product to delete: ")));
        match self.client.delete_product(id).await {
            Ok(product) => self.say(&format!("Product with ID {} deleted.", product.display_id()))?,
            Err(InventoryError::NotFound(_)) => self.say("Product not found.")?,
            Err(e) => return Err(e.into()),
        }
        Ok(Flow::Continue)
    }

    async fn average_price(&mut self) -> Result<Flow, MenuError> {
        let average = self.client.average_price().await?;
        self.say(&format!("Average price of all products: ${}", average))?;
        Ok(Flow::Continue)
    }

    async fn average_price_by_ids(&mut self) -> Result<Flow, MenuError> {
        let count = take_input!(self, self.read::<i64>("Enter the number of IDs: "));
        let mut ids = Vec::new();
        for i in 1..=count {
            let id = take_input!(self, self.read::<i64>(&format!("Enter ID {}: ", i)));
            ids.push(DisplayId(id));
        }
        let average = self.client.average_price_by_ids(ids).await?;
        self.say(&format!("Average price by IDs: ${}", average))?;
        Ok(Flow::Continue)
    }

    async fn exists(&self, id: DisplayId) -> Result<bool, MenuError> {
        match self.client.get_product(id).await {
            Ok(_) => Ok(true),
            Err(InventoryError::NotFound(_)) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn read<T: FromStr>(&mut self, prompt: &str) -> Result<Input<T>, MenuError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let Some(token) = self.next_token().await? else {
            return Ok(Input::Closed);
        };
        Ok(match token.parse::<T>() {
            Ok(value) => Input::Value(value),
            Err(_) => Input::Invalid(token),
        })
    }

    async fn next_token(&mut self) -> Result<Option<String>, MenuError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line).await? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    fn say(&mut self, line: &str) -> Result<(), MenuError> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::Inventory;
    use crate::inventory_actor::InventoryActor;

    async fn run_script(script: &str) -> String {
        let (actor, client) = InventoryActor::new(8, Inventory::new());
        let handle = tokio::spawn(actor.run());

        let mut menu = Menu::new(client, "Test Shop", script.as_bytes(), Vec::new());
        menu.run().await.unwrap();
        let output = String::from_utf8(menu.into_output()).unwrap();

        handle.await.unwrap();
        output
    }

    #[tokio::test]
    async fn test_add_and_show_by_id() {
        let output = run_script(
            "1\nMilk Dairy 5.5 12 Lala Norte 2026-11-01\n2\n1\n2\n9\n0\n",
        )
        .await;

        assert!(output.starts_with("===== Test Shop =====\n"));
        assert!(output.contains("Product added with ID 1\n"));
        assert!(output.contains(
            "ID: 1 - Name: Milk - Category: Dairy - Quantity: 12 - Price: $5.5 - Brand: Lala - Supplier: Norte - Expiration Date: 2026-11-01\n"
        ));
        assert!(output.contains("Product not found.\n"));
        assert!(output.ends_with("Exiting the program.\n"));
    }

    #[tokio::test]
    async fn test_show_by_name() {
        let output = run_script(
            "1 Milk Dairy 5 1 A B x\n1 Bread Bakery 2 1 A B x\n1 Milk Dairy 6 1 C D y\n3 Milk\n3 Eggs\n0\n",
        )
        .await;

        assert!(output.contains("Products named 'Milk':\n"));
        let first = output.find("Name: Milk - ID: 1 -").unwrap();
        let second = output.find("Name: Milk - ID: 3 -").unwrap();
        assert!(first < second);
        assert!(!output.contains("Name: Bread"));
        assert!(output.contains("No products found with that name.\n"));
    }

    #[tokio::test]
    async fn test_updates_and_delete() {
        let output = run_script(
            "1 Milk Dairy 5 1 A B x\n1 Bread Bakery 2 1 A B x\n4 1 5.5\n5 2 0\n4 7\n6 2\n6 2\n7\n0\n",
        )
        .await;

        assert!(output.contains("Price updated successfully.\n"));
        assert!(output.contains("Quantity updated successfully.\n"));
        assert!(output.contains("Product with ID 2 deleted.\n"));
        assert_eq!(output.matches("Product not found.\n").count(), 2);
        assert!(output.contains("Average price of all products: $5.5\n"));
    }

    #[tokio::test]
    async fn test_update_on_missing_id_skips_value_prompt() {
        let output = run_script("4 3\n0\n").await;

        assert!(output.contains("Product not found.\n"));
        assert!(!output.contains("Enter the new price"));
    }

    #[tokio::test]
    async fn test_average_price_by_ids() {
        let output = run_script(
            "7\n1 A c 10 1 b s d\n1 B c 30 1 b s d\n8 3 1 1 2\n8 0\n0\n",
        )
        .await;

        assert!(output.contains("Average price of all products: $0\n"));
        assert!(output.contains("Enter ID 3: "));
        assert!(output.contains("Average price by IDs: $16.666666666666668\n"));
        assert!(output.contains("Average price by IDs: $0\n"));
    }

    #[tokio::test]
    async fn test_bad_input_returns_to_menu() {
        let output = run_script("abc\n42\n1 Milk Dairy cheap\n0\n").await;

        assert_eq!(output.matches("Invalid option. Try again.\n").count(), 2);
        assert!(output.contains("Invalid number: cheap\n"));
        assert!(!output.contains("Product added"));
    }

    #[tokio::test]
    async fn test_end_of_input_exits() {
        let output = run_script("1 Milk Dairy").await;

        assert!(!output.contains("Product added"));
        assert!(output.ends_with("Exiting the program.\n"));
    }
}
