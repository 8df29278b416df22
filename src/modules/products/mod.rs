pub mod models;

use std::sync::Arc;

use anyhow::Context;
use mongodb::bson::{self, doc, Document};
use mongodb::IndexModel;

use orderdb_kernel::Module;

/// Products seed module: the menu collection, its seed records, and
/// the indexes queries rely on.
pub struct ProductsModule;

impl ProductsModule {
    pub const fn new() -> Self {
        Self
    }
}

impl Module for ProductsModule {
    fn name(&self) -> &'static str {
        "products"
    }

    fn collection(&self) -> &'static str {
        "products"
    }

    fn seed_documents(&self) -> anyhow::Result<Vec<Document>> {
        models::seed_products()
            .iter()
            .map(|product| {
                bson::to_document(product)
                    .with_context(|| format!("failed to encode seed product '{}'", product.id))
            })
            .collect()
    }

    fn indexes(&self) -> Vec<IndexModel> {
        vec![
            // The _id index is unique by construction; the server
            // rejects an explicit `unique` flag on it.
            IndexModel::builder().keys(doc! { "_id": 1 }).build(),
            IndexModel::builder().keys(doc! { "category": 1 }).build(),
            IndexModel::builder()
                .keys(doc! { "name": "text", "description": "text" })
                .build(),
        ]
    }
}

/// Create a new instance of the products module
pub fn create_module() -> Arc<dyn Module> {
    Arc::new(ProductsModule::new())
}
