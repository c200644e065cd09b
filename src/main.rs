use std::sync::Arc;

use fontgame::{
    config::AppConfig,
    game::{start_cleanup_task, CleanupConfig},
    scores::{InMemoryScoreRepository, PostgresScoreRepository, ScoreRepository},
    AppState, Catalog, GameService,
};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fontgame=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting font game server");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "Invalid configuration");
            return;
        }
    };

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_path(path),
        None => Catalog::builtin(),
    };
    let catalog = match catalog {
        Ok(catalog) => catalog,
        Err(err) => {
            error!(%err, "Failed to load font catalog");
            return;
        }
    };
    info!(font_count = catalog.len(), "Font catalog loaded");

    // Scores go to PostgreSQL when DATABASE_URL is set, memory otherwise
    let score_repository: Arc<dyn ScoreRepository> = match &config.database_url {
        Some(database_url) => match sqlx::PgPool::connect(database_url).await {
            Ok(pool) => {
                info!("Connected to score database");
                Arc::new(PostgresScoreRepository::new(pool))
            }
            Err(err) => {
                error!(%err, "Failed to connect to database");
                return;
            }
        },
        None => {
            warn!("DATABASE_URL not set, scores are kept in memory");
            Arc::new(InMemoryScoreRepository::new())
        }
    };

    let game_service = Arc::new(GameService::new(Arc::new(catalog), score_repository));
    tokio::spawn(start_cleanup_task(
        Arc::clone(&game_service),
        CleanupConfig::default(),
    ));

    let app = fontgame::router(AppState::new(game_service));

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(%err, addr = %config.bind_addr, "Failed to bind");
            return;
        }
    };
    info!("Server running on http://{}", config.bind_addr);

    if let Err(err) = axum::serve(listener, app).await {
        error!(%err, "Server error");
    }
}
