use anyhow::{Context, Result as AnyhowResult};
use fleet_logging::setup_logging;
use fleet_settings::FleetConfig;
use fleet_sql::{SqlClient, SqlClientEnum};
use tracing::{info, warn};

pub async fn setup_components() -> AnyhowResult<(FleetConfig, SqlClientEnum)> {
    // setup config
    let config = FleetConfig::from_env().context("Failed to load configuration")?;

    // start logging
    setup_logging().context("Failed to setup logging")?;

    info!(
        "Starting {} v{} ({})",
        config.app_name, config.app_version, config.app_env
    );

    if config.jwt_secret.is_none() {
        warn!("JWT_SECRET_KEY is not set, token issuance and validation will fail");
    }

    // setup sql client, migrations run on connect
    let sql_client = SqlClientEnum::new(&config.database_settings)
        .await
        .context("Failed to setup sql client")?;

    info!("Sql client: {}", sql_client.name());

    Ok((config, sql_client))
}
