use anyhow::Context;

use triangle_api::{app::build_app, config::AppConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;
    triangle_observability::init(config.log_format());

    if !config.session_secret().is_configured() {
        tracing::error!("session secret not set; every gated request will be sent to /login");
    }

    let app = build_app(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr()))?;

    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
