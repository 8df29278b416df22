//! MongoDB side of the bootstrap: connection, credential provisioning,
//! collections, seed data, and indexes.

use mongodb::bson::doc;
use mongodb::Client;

use orderdb_kernel::settings::StoreSettings;

pub mod bootstrap;
pub mod error;
pub mod provision;

pub use bootstrap::{run, BootstrapReport};
pub use error::StoreError;

/// Connect to the document store and verify the connection with a ping.
///
/// The returned client is the only handle to the store; callers pass it
/// down explicitly rather than stashing it in a global.
pub async fn connect(store: &StoreSettings) -> Result<Client, StoreError> {
    let client = Client::with_uri_str(&store.uri)
        .await
        .map_err(|source| StoreError::Connect {
            uri: store.uri.clone(),
            source,
        })?;

    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|source| StoreError::Connect {
            uri: store.uri.clone(),
            source,
        })?;

    tracing::info!(uri = %store.uri, "connected to document store");

    Ok(client)
}
