use std::time::Duration;

use dotenvy::dotenv;
use sea_orm::{ConnectOptions, Database};
use sea_orm_migration::MigratorTrait;
use time::Duration as TimeDuration;
use tower_sessions::{ExpiredDeletion, Expiry, SessionManagerLayer};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use scarlet_shop::catalog;
use scarlet_shop::config::Config;
use scarlet_shop::migration::Migrator;
use scarlet_shop::{router, AppState, DbSessionStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    dotenv().ok();

    let config = Config::load();

    info!("Connecting to database: {}", config.database_url);

    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(10)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(10))
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(10))
        .max_lifetime(Duration::from_secs(10 * 60));

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;
    catalog::seed_sizes(&db).await?;

    let store = DbSessionStore::new(db.clone());
    // Clear out sessions that expired while the process was down
    store.delete_expired().await?;

    let session_layer = SessionManagerLayer::new(store)
        .with_secure(config.session_secure)
        .with_expiry(Expiry::OnInactivity(TimeDuration::days(7)));

    let app = router(AppState { db }).layer(session_layer);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Server starting on http://{}", config.bind_addr);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
