use std::sync::Arc;

use aina_core::soil::SoilCatalog;
use aina_store::postgres::{PostgresConfig, PostgresStore};
use aina_store::{MemoryMetricStore, MetricStore};
use anyhow::Context;
use axum::http::{header, HeaderName, HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aina_api::handlers::USER_SUBJECT_HEADER;
use aina_api::{create_router, ApiConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aina_api=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env();
    let layered = config.layered().context("Failed to load configuration")?;

    tracing::info!(
        port = config.port,
        area = %layered.area.value.name,
        data_dir = %layered.data_dir.value.display(),
        cache_ttl_secs = layered.cache_ttl_secs.value,
        "Starting Aina API server"
    );

    // Refuse to serve soil data from a file whose columns have moved
    let soil_path = layered.soil_path();
    match SoilCatalog::verify_header(&soil_path).await {
        Ok(()) => tracing::info!(path = %soil_path.display(), "Soil component header verified"),
        Err(e) if e.is_not_found() => {
            tracing::warn!(
                path = %soil_path.display(),
                "Soil component file missing; soil endpoint will fail"
            )
        }
        Err(e) => {
            tracing::error!(error = %e, "Soil component file does not match the expected layout");
            return Err(e).context("Soil header check failed");
        }
    }

    let metric_store: Arc<dyn MetricStore> = if config.uses_postgres() {
        tracing::info!("DATABASE_URL found, connecting to PostgreSQL...");
        let pg_config = PostgresConfig::from_env().context("Invalid PostgreSQL configuration")?;
        match PostgresStore::connect(pg_config).await {
            Ok(store) => {
                tracing::info!("Connected to PostgreSQL");
                Arc::new(store)
            }
            Err(e) => {
                tracing::error!("Failed to connect to PostgreSQL: {}", e);
                tracing::error!(
                    "Remediation:\n\
                    1. Ensure PostgreSQL is running\n\
                    2. Verify DATABASE_URL is correct\n\
                    3. Check that the database exists and is accessible"
                );
                return Err(e.into());
            }
        }
    } else {
        tracing::info!("Using in-memory metric store (set DATABASE_URL for PostgreSQL)");
        Arc::new(MemoryMetricStore::new())
    };

    let state = Arc::new(AppState::new(layered, metric_store));

    let origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid AINA_CORS_ORIGIN '{}'", config.cors_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(USER_SUBJECT_HEADER)]);

    let app = create_router(state).layer(cors);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("CORS enabled for {}", config.cors_origin);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
