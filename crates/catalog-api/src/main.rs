//! # Product Catalog
//!
//! In-memory product catalog REST API.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables (or put them in .env)
//! export API_KEY=change-me
//! export PORT=3000
//!
//! # Run the server
//! product-catalog
//! ```

use catalog_api::{routes, state::AppState};
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    print_banner();

    let state = AppState::new()?;

    let addr = state.config.socket_addr()?;
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Products loaded: {}", state.store.len().await);

    if is_prod && state.config.uses_default_api_key() {
        warn!("Running in production with the default API key; set API_KEY");
    }

    let app = routes::create_router(state);

    info!("🚀 Product catalog starting on http://{}", addr);

    if !is_prod {
        info!("📝 Health: http://{}/health", addr);
        info!("📦 Products: GET http://{}/api/products", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// `LOG_FORMAT=json` switches to structured JSON output
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();

    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init();
    }
}

fn print_banner() {
    println!(
        r#"
  📦 Product Catalog 📦
  ━━━━━━━━━━━━━━━━━━━━━━━
  In-memory catalog API
  Version: {}
  
"#,
        env!("CARGO_PKG_VERSION")
    );
}
