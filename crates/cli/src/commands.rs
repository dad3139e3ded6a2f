//! Cart commands

use std::io;

use makercart::{
    cart::{CartLineItem, LineItemError},
    storage::{FileStorage, KeyValueStore},
    store::CartStore,
    summary::{SummaryError, write_summary},
};
use rusty_money::iso;
use thiserror::Error;
use tracing::info;

use crate::config::{CliConfig, Command};

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The configured currency code is not an ISO 4217 currency.
    #[error("unknown currency {0:?}")]
    UnknownCurrency(String),

    /// The item to add was invalid.
    #[error(transparent)]
    LineItem(#[from] LineItemError),

    /// The cart could not be printed.
    #[error(transparent)]
    Summary(#[from] SummaryError),
}

/// Open the stored cart, run the configured command and print the result to `out`.
pub(crate) fn run(config: &CliConfig, out: impl io::Write) -> Result<(), CommandError> {
    let currency = iso::find(&config.storage.currency)
        .ok_or_else(|| CommandError::UnknownCurrency(config.storage.currency.clone()))?;

    let mut store = CartStore::open(FileStorage::new(&config.storage.storage_dir));

    apply(&mut store, &config.command)?;

    write_summary(out, store.cart(), currency)?;

    Ok(())
}

fn apply<S: KeyValueStore>(
    store: &mut CartStore<S>,
    command: &Command,
) -> Result<(), CommandError> {
    match command {
        Command::Add {
            service_id,
            maker_id,
            service_name,
            maker_name,
            price,
            quantity,
        } => {
            let item = CartLineItem::new(
                service_id.as_str(),
                maker_id.as_str(),
                service_name.as_str(),
                maker_name.as_str(),
                *price,
                *quantity,
            )?;

            info!("adding {quantity} x {service_id} from {maker_id}");

            store.add_to_cart(item);
        }
        Command::Remove {
            service_id,
            maker_id,
        } => {
            info!("removing {service_id} from {maker_id}");

            store.remove_from_cart(service_id, maker_id);
        }
        Command::Update {
            service_id,
            maker_id,
            quantity,
        } => {
            info!("setting {service_id} from {maker_id} to {quantity}");

            store.update_quantity(service_id, maker_id, *quantity);
        }
        Command::Clear => {
            info!("clearing cart");

            store.clear_cart();
        }
        Command::Show => {}
    }

    Ok(())
}
