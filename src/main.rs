use tokio::io::{stdin, stdout, BufReader};
use tracing_subscriber::EnvFilter;

use barber_booking::config::AppConfig;
use barber_booking::prompt::Session;
use barber_booking::services::backend::http::HttpBookingBackend;
use barber_booking::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::from_env();
    tracing::info!(
        backend = %config.backend_url,
        phone_format = config.phone_format.as_str(),
        placeholders = config.show_placeholders,
        "starting booking form"
    );

    let backend = HttpBookingBackend::new(&config.backend_url, config.http_timeout)?;
    let state = AppState {
        config,
        backend: Box::new(backend),
    };

    let mut session = Session::new(&state, BufReader::new(stdin()), stdout());
    session.run().await?;

    Ok(())
}
