//! Lobbydesk admin console smoke binary.
//!
//! Logs in with `LOBBYDESK_USERNAME` / `LOBBYDESK_PASSWORD`, fetches the
//! platform overview, and prints it. Useful for checking connectivity
//! and credentials against a deployed backend.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use lobbydesk_domain::stats::StatWindow;
use lobbydesk_infrastructure::{ApiClient, ApiConfig, SessionEvent};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env();
    tracing::info!(base_url = %config.base_url, "starting lobbydesk console v{}", env!("CARGO_PKG_VERSION"));

    let username = std::env::var("LOBBYDESK_USERNAME")?;
    let password = std::env::var("LOBBYDESK_PASSWORD")?;

    let client = ApiClient::new(config)?;
    client.on_session_event(|event| {
        if event == SessionEvent::AuthenticationRequired {
            tracing::warn!("session expired, log in again");
        }
    });

    let login = client.login(&username, &password).await?;
    tracing::info!(user = %login.user.username, "logged in");

    let overview = client.stats().overview(&StatWindow::default()).await?;
    println!("{overview:#?}");

    client.logout().await;
    Ok(())
}
