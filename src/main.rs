use jarvis::integration::AppConfig;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jarvis=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Jarvis assistant");

    let config = AppConfig::from_env();
    for warning in config.validate().map_err(anyhow::Error::msg)? {
        warn!("{}", warning);
    }

    jarvis::ui::run(config).map_err(|e| anyhow::anyhow!("GUI failed: {}", e))
}
