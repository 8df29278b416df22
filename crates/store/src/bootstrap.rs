//! Ordered application of seed modules against the target database.

use mongodb::bson::{doc, Document};
use mongodb::Client;

use orderdb_kernel::settings::Settings;
use orderdb_kernel::ModuleRegistry;

use crate::error::StoreError;
use crate::provision;

/// Counts of what one bootstrap run actually changed.
#[derive(Debug, Default, Clone)]
pub struct BootstrapReport {
    pub users_created: u64,
    pub collections_created: u64,
    pub documents_inserted: u64,
    pub indexes_ensured: u64,
}

/// Apply every registered module to the target database, in
/// registration order.
///
/// Each step probes before it writes: the user is created only when
/// absent, collections only when missing, and seeds only into an empty
/// collection. Re-running against an initialized database changes
/// nothing and still succeeds.
pub async fn run(
    client: &Client,
    settings: &Settings,
    registry: &ModuleRegistry,
) -> anyhow::Result<BootstrapReport> {
    let mut report = BootstrapReport::default();

    if provision::ensure_app_user(client, &settings.store, &settings.app_user).await? {
        report.users_created += 1;
    }

    let db = client.database(&settings.store.database);
    let existing = db
        .list_collection_names()
        .await
        .map_err(|source| StoreError::ListCollections { source })?;

    for module in registry.modules() {
        let name = module.collection();

        if !existing.iter().any(|known| known == name) {
            db.create_collection(name)
                .await
                .map_err(|source| StoreError::Collection {
                    collection: name.to_string(),
                    source,
                })?;
            tracing::info!(collection = name, "collection created");
            report.collections_created += 1;
        }

        let collection = db.collection::<Document>(name);

        let count = collection
            .count_documents(doc! {})
            .await
            .map_err(|source| StoreError::Seed {
                collection: name.to_string(),
                source,
            })?;

        if count == 0 {
            let documents = module.seed_documents()?;
            if !documents.is_empty() {
                let inserted = collection
                    .insert_many(&documents)
                    .await
                    .map_err(|source| StoreError::Seed {
                        collection: name.to_string(),
                        source,
                    })?;
                tracing::info!(
                    collection = name,
                    count = inserted.inserted_ids.len(),
                    "seed documents inserted"
                );
                report.documents_inserted += inserted.inserted_ids.len() as u64;
            }
        } else {
            tracing::info!(
                collection = name,
                count,
                "collection already holds documents, skipping seeds"
            );
        }

        let indexes = module.indexes();
        if !indexes.is_empty() {
            let created = collection
                .create_indexes(indexes)
                .await
                .map_err(|source| StoreError::Index {
                    collection: name.to_string(),
                    source,
                })?;
            tracing::info!(
                collection = name,
                indexes = ?created.index_names,
                "indexes ensured"
            );
            report.indexes_ensured += created.index_names.len() as u64;
        }
    }

    Ok(report)
}
