use customer_invites::config::{LoggingSettings, Settings};
use customer_invites::{write_report, ConsoleSink, CustomerFeed, EligibilityPipeline};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Logs go to stderr; stdout is reserved for the report.
///
/// `RUST_LOG` wins over `LOG_LEVEL`, which wins over the configured level.
fn init_logging(logging: &LoggingSettings) {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| logging.format.clone());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load();
    let logging = settings
        .as_ref()
        .map(|s| s.logging.clone())
        .unwrap_or_default();
    init_logging(&logging);

    info!("Starting customer invites run...");

    let settings = settings.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    let criteria = settings.criteria();

    info!(
        "Office at ({}, {}), invite radius {}km",
        criteria.origin.latitude, criteria.origin.longitude, criteria.max_distance_km
    );

    let feed = CustomerFeed::new(settings.source.url.clone(), settings.source.timeout_secs)
        .map_err(|e| {
            error!("Failed to create feed client: {}", e);
            std::io::Error::other(e)
        })?;

    let lines = feed.fetch_lines().await.map_err(|e| {
        error!("Failed to fetch customer feed: {}", e);
        std::io::Error::other(e)
    })?;

    // Validation failures go to the console alongside the report
    let mut sink = ConsoleSink;
    let result = EligibilityPipeline::new(criteria).run(&lines, &mut sink);

    write_report(&mut sink, &result.eligible);

    info!("Invited {} customers", result.eligible.len());

    Ok(())
}
