use anyhow::Context;
use carrier_registry::{startup, AppConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "carrier_registry=debug,carrier_gls=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("Failed to load carrier configuration")?;
    let store = startup::load_carriers(&config).context("Invalid carrier configuration")?;
    tracing::info!("{} carrier(s) configured", store.len());

    let catalog = startup::build_file_type_catalog(&config.label_catalog);
    for file_type in catalog.entries() {
        tracing::info!("Label file type {} ({})", file_type.code, file_type.name);
    }

    Ok(())
}
