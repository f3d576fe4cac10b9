//! FieldLink client - Main entry point
//!
//! Wires the storage backends, HTTP transport, and refresher into the
//! authenticated client, then runs a small session check: report who is
//! logged in, or log in with credentials from the environment.

use std::sync::Arc;
use std::time::Duration;

use fieldlink_application::api::{AuthApi, ProfileApi};
use fieldlink_application::{ApiClient, HttpRefresher, TokenStore};
use fieldlink_infrastructure::{FileStorage, MemoryStorage, ReqwestTransport};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default backend, matching the development server.
const DEFAULT_BASE_URL: &str = "http://localhost:5000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_url =
        std::env::var("FIELDLINK_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let mut transport = ReqwestTransport::new(&base_url)?;
    if let Ok(timeout_ms) = std::env::var("FIELDLINK_TIMEOUT_MS") {
        transport = transport.with_timeout(Duration::from_millis(timeout_ms.parse()?));
    }
    let transport: Arc<_> = Arc::new(transport);

    let store = TokenStore::new(
        Arc::new(FileStorage::open_default()?),
        Arc::new(MemoryStorage::new()),
    );
    let client = ApiClient::new(
        transport.clone(),
        Arc::new(HttpRefresher::new(transport)),
        store,
    );

    tracing::info!(
        base_url,
        version = env!("CARGO_PKG_VERSION"),
        "FieldLink client ready"
    );

    if client.token_store().access_token().is_some() {
        let profile = ProfileApi::new(client.clone()).get().await?;
        tracing::info!(engineer = %profile.name, email = %profile.email, "session active");
        return Ok(());
    }

    let (Ok(email), Ok(password)) = (
        std::env::var("FIELDLINK_EMAIL"),
        std::env::var("FIELDLINK_PASSWORD"),
    ) else {
        tracing::info!("no stored session; set FIELDLINK_EMAIL and FIELDLINK_PASSWORD to log in");
        return Ok(());
    };

    let remember = std::env::var("FIELDLINK_REMEMBER").is_ok_and(|v| v == "1" || v == "true");
    let pair = AuthApi::new(client).login(&email, &password, remember).await?;
    match pair.user {
        Some(user) => tracing::info!(engineer = %user.name, remember, "logged in"),
        None => tracing::info!(remember, "logged in"),
    }

    Ok(())
}
