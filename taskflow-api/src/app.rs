/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use taskflow_api::{app::AppState, config::Config};
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let state = AppState::new(pool, config);
/// let app = taskflow_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::{config::Config, middleware::security::SecurityHeadersLayer, routes};
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, patch, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use taskflow_shared::chat::{ChatResponder, RuleBasedResponder};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
/// Uses Arc internally for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,

    /// Chat reply generator (rule-based by default)
    pub responder: Arc<dyn ChatResponder>,
}

impl AppState {
    /// Creates new application state with the default rule-based responder
    pub fn new(db: PgPool, config: Config) -> Self {
        Self::with_responder(db, config, Arc::new(RuleBasedResponder::new()))
    }

    /// Creates new application state with a custom chat responder
    ///
    /// The chat endpoint is a plain text-in/text-out seam; swapping the
    /// responder here is how an external model would be plugged in.
    pub fn with_responder(db: PgPool, config: Config, responder: Arc<dyn ChatResponder>) -> Self {
        Self {
            db,
            config: Arc::new(config),
            responder,
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── GET    /                                   # Service banner
/// ├── GET    /health                             # Health check
/// ├── POST   /users                              # Create user
/// ├── GET    /users/:user_id                     # Fetch user
/// ├── GET    /api/:user_id/tasks                 # List a user's tasks
/// ├── POST   /api/:user_id/tasks                 # Create task for user
/// ├── GET    /api/:user_id/tasks/:task_id        # Fetch task
/// ├── PUT    /api/:user_id/tasks/:task_id        # Partial update
/// ├── DELETE /api/:user_id/tasks/:task_id        # Delete task
/// ├── PATCH  /api/:user_id/tasks/:task_id/complete # Toggle completion
/// ├── POST   /api/chat                           # Chat assistant
/// └── flat compatibility surface:
///     ├── GET    /tasks                          # List all tasks
///     ├── POST   /tasks                          # Create unowned task
///     ├── PUT    /tasks/:task_id                 # Toggle completion
///     ├── DELETE /tasks/:task_id                 # Delete task
///     └── POST   /chat                           # Chat assistant
/// ```
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer)
/// 3. Security headers
pub fn build_router(state: AppState) -> Router {
    // Service endpoints (banner + health)
    let service_routes = Router::new()
        .route("/", get(routes::health::root))
        .route("/health", get(routes::health::health_check));

    // User endpoints
    let user_routes = Router::new()
        .route("/users", post(routes::users::create_user))
        .route("/users/:user_id", get(routes::users::get_user));

    // Per-user task endpoints. The static "/api/chat" segment takes
    // precedence over the ":user_id" parameter.
    let task_routes = Router::new()
        .route(
            "/api/:user_id/tasks",
            get(routes::tasks::list_tasks).post(routes::tasks::create_task),
        )
        .route(
            "/api/:user_id/tasks/:task_id",
            get(routes::tasks::get_task)
                .put(routes::tasks::update_task)
                .delete(routes::tasks::delete_task),
        )
        .route(
            "/api/:user_id/tasks/:task_id/complete",
            patch(routes::tasks::toggle_complete),
        )
        .route("/api/chat", post(routes::chat::chat));

    // Flat compatibility surface
    let compat_routes = Router::new()
        .route(
            "/tasks",
            get(routes::compat::list_tasks).post(routes::compat::create_task),
        )
        .route(
            "/tasks/:task_id",
            put(routes::compat::toggle_task).delete(routes::compat::delete_task),
        )
        .route("/chat", post(routes::chat::chat));

    // Configure CORS based on environment
    let cors = if state.config.api.cors_origins.contains(&"*".to_string()) {
        // Development mode: permissive CORS
        CorsLayer::permissive()
    } else {
        // Production mode: configure allowed origins
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::PATCH,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE])
            .max_age(std::time::Duration::from_secs(3600))
    };

    let production = state.config.api.production;

    Router::new()
        .merge(service_routes)
        .merge(user_routes)
        .merge(task_routes)
        .merge(compat_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .layer(SecurityHeadersLayer::new(production))
        .with_state(state)
}
