use anyhow::Context;
use orderdb_init::modules;
use orderdb_kernel::settings::Settings;
use orderdb_kernel::ModuleRegistry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load ORDERDB settings")?;

    orderdb_telemetry::init(&settings.telemetry)?;

    tracing::info!(
        env = ?settings.environment,
        database = %settings.store.database,
        "orderdb-init bootstrap starting"
    );

    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry);

    let client = orderdb_store::connect(&settings.store).await?;

    let report = orderdb_store::run(&client, &settings, &registry)
        .await
        .with_context(|| format!("failed to bootstrap '{}'", settings.store.database))?;

    tracing::info!(
        users_created = report.users_created,
        collections_created = report.collections_created,
        documents_inserted = report.documents_inserted,
        indexes_ensured = report.indexes_ensured,
        "orderdb-init bootstrap complete"
    );

    println!("{} initialized successfully", settings.store.database);

    Ok(())
}
