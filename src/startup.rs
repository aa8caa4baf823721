//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;

use crate::application::services::{AdvertisementService, AdvertisementServiceImpl};
use crate::config::{Settings, StorageBackend};
use crate::domain::AdvertisementRepository;
use crate::infrastructure::database;
use crate::infrastructure::repositories::{InMemoryAdvertisementRepository, PgAdvertisementRepository};
use crate::presentation::http::routes;
use crate::presentation::middleware::{cors, logging};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub advertisements: Arc<dyn AdvertisementService>,
    pub store: Arc<dyn AdvertisementRepository>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Wire the advertisement service on top of a document store
    pub fn new(settings: Settings, store: Arc<dyn AdvertisementRepository>) -> Self {
        Self {
            advertisements: Arc::new(AdvertisementServiceImpl::new(store.clone())),
            store,
            settings: Arc::new(settings),
        }
    }
}

/// Build the full router, middleware included
pub fn build_router(state: AppState) -> Router {
    let cors = cors::create_cors_layer(&state.settings.cors);
    routes::create_router(state)
        .layer(logging::create_trace_layer())
        .layer(cors)
}

/// Open the configured document store
async fn connect_store(settings: &Settings) -> Result<Arc<dyn AdvertisementRepository>> {
    match settings.storage.backend {
        StorageBackend::Postgres => {
            let url = settings
                .database
                .url
                .as_deref()
                .context("database.url is required for the postgres backend")?;
            let pool = database::create_pool(&settings.database, url).await?;
            tracing::info!("Database connection pool created");

            if settings.database.run_migrations {
                database::run_migrations(&pool).await?;
                tracing::info!("Database migrations applied");
            }

            Ok(Arc::new(PgAdvertisementRepository::new(pool)))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory store; advertisements are lost on restart");
            Ok(Arc::new(InMemoryAdvertisementRepository::new()))
        }
    }
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        let store = connect_store(&settings).await?;
        let addr = settings.server_addr();

        let state = AppState::new(settings, store);
        let router = build_router(state);

        // Bind to address
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {}", addr))?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}
