use axum::{
    http::HeaderValue,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post, put},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::SecurityConfig;
use crate::handlers::{self, elevated, protected, public};
use crate::middleware::{require_admin, require_auth};
use crate::state::AppState;

/// Full route table: user routes under `/api/users` plus `/health`
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .nest("/api/users", user_routes(state.clone()))
        // A panicking handler still answers 500
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `app` plus the CORS policy from configuration
pub fn app_with_cors(state: AppState, security: &SecurityConfig) -> Router {
    let router = app(state);
    match cors_layer(security) {
        Some(cors) => router.layer(cors),
        None => router,
    }
}

fn user_routes(state: AppState) -> Router<AppState> {
    public_routes()
        .merge(protected_routes(state.clone()))
        .merge(elevated_routes(state))
}

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/seed", get(public::seed_get))
        .route("/signin", post(public::signin_post))
        .route("/register", post(public::register_post))
        .route("/:id", get(public::user_get))
}

fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/profile", put(protected::profile_put))
        .route("/vendor/:id", put(protected::vendor_put))
        .route_layer(from_fn_with_state(state, require_auth))
}

fn elevated_routes(state: AppState) -> Router<AppState> {
    // The last layer added runs first: auth, then admin
    Router::new()
        .route("/", get(elevated::users_list))
        .route("/:id", put(elevated::user_put).delete(elevated::user_delete))
        .route_layer(from_fn(require_admin))
        .route_layer(from_fn_with_state(state, require_auth))
}

fn cors_layer(security: &SecurityConfig) -> Option<CorsLayer> {
    if !security.enable_cors {
        return None;
    }

    if security.cors_origins.iter().any(|o| o == "*") {
        return Some(CorsLayer::permissive());
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any),
    )
}

/// Bind and serve until the process is stopped
pub async fn serve(router: Router, bind_addr: &str) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .map_err(|e| anyhow::anyhow!("failed to bind {}: {}", bind_addr, e))?;

    tracing::info!("Marketplace users API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
