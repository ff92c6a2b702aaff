//! Application Startup
//!
//! Application building and server initialization. Dependencies are built
//! explicitly: pool, repository, service, photo store, router.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;

use crate::application::services::{CustomerService, CustomerServiceImpl};
use crate::config::Settings;
use crate::infrastructure::database;
use crate::infrastructure::repositories::PgCustomerRepository;
use crate::infrastructure::storage::PhotoStore;
use crate::presentation::http::routes;
use crate::presentation::middleware::{cors, logging};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn CustomerService>,
    pub photos: Arc<PhotoStore>,
    pub settings: Arc<Settings>,
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        // Create database pool
        let db = database::create_pool(&settings.database).await?;
        tracing::info!("Database connection pool created");

        // Apply pending migrations
        database::run_migrations(&db).await?;
        tracing::info!("Database migrations applied");

        // Wire dependencies explicitly
        let repository = Arc::new(PgCustomerRepository::new(db));
        let service: Arc<dyn CustomerService> = Arc::new(CustomerServiceImpl::new(repository));
        let photos = Arc::new(PhotoStore::new(settings.uploads.dir.clone()));

        let state = AppState {
            service,
            photos,
            settings: Arc::new(settings.clone()),
        };

        // Build router with middleware
        let router = routes::create_router(state)
            .layer(logging::create_trace_layer())
            .layer(cors::create_cors_layer(&settings.cors));

        // Bind to the configured address
        let addr = settings.server_addr();
        let listener = TcpListener::bind(addr.as_str()).await?;
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
