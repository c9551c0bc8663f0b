#[macro_use]
extern crate tracing;

use std::sync::Arc;

use actix_web::middleware::Condition;
use actix_web::{App, HttpServer};
use anyhow::Context;

use expense_lib::auth::StaticHeaderAuth;
use expense_lib::config::Config;
use expense_repo::expense_repo::ExpenseRepo;

const SERVICE_NAME: &str = "expense-server";
const SHUTDOWN_TIMEOUT_SECS: u64 = 10;

#[actix_web::main]
async fn main() -> Result<(), anyhow::Error> {
    let tracing_guard = tracing::subscriber::set_default(expense_lib::tracing::bootstrap_subscriber());
    info!("tracing initialized");

    let config = Config::load()?;

    drop(tracing_guard);
    expense_lib::tracing::init_global_subscriber(
        SERVICE_NAME,
        config.honeycomb_api_key.as_deref(),
    )?;

    let sqlx_repo = Arc::new(
        expense_repo::sqlx_repo::create_repo(&config.database_url, config.max_pool_size).await?,
    );
    let expense_repo: Arc<dyn ExpenseRepo> = sqlx_repo.clone();

    let auth_token = config.auth_token.clone();
    if auth_token.is_some() {
        info!("Authorization header check enabled");
    } else {
        warn!("Authorization header check disabled");
    }

    info!(port = config.port, "start at port");
    HttpServer::new(move || {
        let static_header_auth = StaticHeaderAuth::new(auth_token.as_deref().unwrap_or_default());
        App::new()
            .wrap(Condition::new(auth_token.is_some(), static_header_auth))
            .wrap(expense_lib::tracing::create_middleware())
            .configure(expense_lib::app_config_func(expense_repo.clone()))
    })
    .shutdown_timeout(SHUTDOWN_TIMEOUT_SECS)
    .bind(("0.0.0.0", config.port))
    .with_context(|| format!("Unable to bind port {}", config.port))?
    .run()
    .await?;

    sqlx_repo.close().await;
    info!("server stopped");

    Ok(())
}
