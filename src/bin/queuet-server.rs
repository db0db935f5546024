//! Queuet server binary: wires configuration, the Postgres pool, the Redis
//! cache, and the HTTP router together.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use queuet::cache::RedisCache;
use queuet::config::QueuetConfig;
use queuet::service::TaskService;
use queuet::store::PgTaskStore;
use queuet::web::{self, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    queuet::logging::init_logging();

    let config = QueuetConfig::from_env().context("loading configuration")?;
    info!(
        bind_address = %config.bind_address,
        max_connections = config.max_connections,
        cache_ttl_secs = config.cache_ttl_secs,
        "starting queuet server"
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .connect(&config.database_url)
        .await
        .context("connecting to postgres")?;
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("running migrations")?;

    let cache = RedisCache::connect(&config.redis_url)
        .await
        .context("connecting to redis")?;

    let service = TaskService::new(
        Arc::new(PgTaskStore::new(pool)),
        Arc::new(cache),
        config.cache_ttl(),
    );
    let app = web::router(AppState::new(Arc::new(service)));

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("binding {}", config.bind_address))?;
    info!("listening on {}", config.bind_address);
    axum::serve(listener, app).await.context("serving http")?;

    Ok(())
}
