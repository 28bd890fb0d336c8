// Diagnostics CLI: per-table content counts and recent intake activity.

use anyhow::Result;
use corporate_cms::cli::stats::{self, ContentStatsConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .init();

    stats::run(ContentStatsConfig::default()).await
}
