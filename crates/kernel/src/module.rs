use mongodb::bson::Document;
use mongodb::IndexModel;

/// A unit of database bootstrap: one collection, its seed documents,
/// and the indexes it needs.
///
/// Modules are declarative. They describe what their collection should
/// contain at startup; the store crate decides how (and whether) to
/// apply each piece.
pub trait Module: Send + Sync {
    /// Unique name for this module.
    fn name(&self) -> &'static str;

    /// Name of the collection this module owns.
    fn collection(&self) -> &'static str;

    /// Documents inserted when the collection is empty.
    fn seed_documents(&self) -> anyhow::Result<Vec<Document>> {
        Ok(vec![])
    }

    /// Index models created for the collection.
    /// Indexes are created in the order returned.
    fn indexes(&self) -> Vec<IndexModel> {
        vec![]
    }
}
