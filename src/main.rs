//! Main entry point for the Bookstore backend API.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookstore::app::{AppState, build_app};
use bookstore::config::Config;
use bookstore::db::{Database, seed};
use bookstore::graphql;
use bookstore::ids::ObjectIdGenerator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    let config = Arc::new(config);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookstore=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Bookstore Backend");

    // A storage connection or index failure here aborts startup entirely.
    let db = Database::connect(&config.mongodb_uri, &config.mongodb_database).await?;
    db.ensure_indexes().await?;
    tracing::info!("Database connected");

    if config.environment.is_development() && config.seed_demo_data {
        let seeded = seed::seed_demo_books(&db).await?;
        if seeded > 0 {
            tracing::info!(books = seeded, "Seeded demo catalog");
        }
    }

    let schema = graphql::build_schema(Arc::new(db.books()), Arc::new(ObjectIdGenerator));
    tracing::info!("GraphQL schema built");

    let state = AppState {
        config: config.clone(),
        db,
        schema,
    };
    let app = build_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);
    tracing::info!(
        "GraphQL playground: http://localhost:{}/graphql",
        config.port
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
