use std::env;

use repair_bay::{app, error::StartupError, telemetry, utils::constant::DEFAULT_BIND_ADDR};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    dotenvy::dotenv().ok();

    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
    telemetry::init_subscriber(&app_env);

    let app = app()?;

    let addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, %app_env, "Server starting");

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
