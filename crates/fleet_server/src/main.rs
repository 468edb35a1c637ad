use anyhow::{Context, Result as AnyhowResult};
use fleet_auth::AuthManager;
use fleet_server::core::router::create_router;
use fleet_server::core::setup::setup_components;
use fleet_server::core::state::AppState;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> AnyhowResult<()> {
    let (config, sql_client) = setup_components().await?;

    let auth_manager = AuthManager::new(config.jwt_secret.as_deref());
    let address = config.server_address();

    let app_state = Arc::new(AppState {
        sql_client: Arc::new(sql_client),
        auth_manager: Arc::new(auth_manager),
    });

    let app = create_router(app_state).await;

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!("Listening on {}", address);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
