use bloom_data::db::LocalStore;
use mimalloc::MiMalloc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = &bloom_data::config::CONFIG;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(database_url = %cfg.database_url, loglevel = %cfg.loglevel);

    let store = LocalStore::connect(&cfg.database_url).await?;
    store.init_schema().await?;

    match store.list_unsynced_check_ins().await {
        Ok(pending) if !pending.is_empty() => {
            info!(count = pending.len(), "check-ins waiting for cloud sync");
        }
        Ok(_) => info!("local store is fully synced"),
        Err(e) => warn!(error = %e, "failed to read unsynced check-ins"),
    }

    Ok(())
}
