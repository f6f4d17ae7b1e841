use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing::{error, info, warn};

use resto_api::{build_router, AppState};
use resto_core::repositories::{CategoryRepository, MenuItemRepository};
use resto_core::services::CatalogService;
use resto_infrastructure::database::connection;
use resto_infrastructure::{InMemoryCatalog, PgCategoryRepository, PgMenuItemRepository};
use resto_shared::config::{AppConfig, CorsSettings, StorageBackend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (also reads .env)
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize telemetry; the guard flushes file logs on exit
    let _log_guard = resto_shared::telemetry::init_telemetry(&config.logging)?;

    info!("{} starting (env: {})...", config.app.name, config.app.env);

    let (categories, menu_items): (Arc<dyn CategoryRepository>, Arc<dyn MenuItemRepository>) =
        match config.storage.backend {
            StorageBackend::Postgres => {
                info!("Connecting to database...");
                let pool = connection::create_pool(&config.database)
                    .await
                    .context("Failed to connect to database")?;
                info!("Database connection established.");

                if config.storage.run_migrations {
                    connection::run_migrations(&pool).await?;
                }

                let categories: Arc<dyn CategoryRepository> =
                    Arc::new(PgCategoryRepository::new(pool.clone()));
                let menu_items: Arc<dyn MenuItemRepository> =
                    Arc::new(PgMenuItemRepository::new(pool));
                (categories, menu_items)
            }
            StorageBackend::Memory => {
                warn!("Using in-memory storage; data is lost on restart");
                let store = Arc::new(InMemoryCatalog::new());
                let categories: Arc<dyn CategoryRepository> = store.clone();
                let menu_items: Arc<dyn MenuItemRepository> = store;
                (categories, menu_items)
            }
        };

    let policy = config.catalog.category_delete_policy;
    info!("Category delete policy: {}", policy);
    let catalog = CatalogService::new(categories, menu_items, policy);
    let state = AppState::new(Arc::new(catalog));

    let images_dir = format!("{}/images", config.app.static_dir.trim_end_matches('/'));
    let app = build_router(state)
        .nest_service("/images", ServeDir::new(images_dir))
        .layer(cors_layer(&config.cors))
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()));

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn cors_layer(settings: &CorsSettings) -> CorsLayer {
    let origins: Vec<HeaderValue> = settings
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
