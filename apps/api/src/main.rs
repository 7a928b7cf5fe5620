//! Kapelle API composition root.

#![forbid(unsafe_code)]

mod dev_seed;
mod dto;
mod error;
mod handlers;
mod middleware;
mod state;

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;

use axum::Router;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, Method};
use axum::middleware::from_fn;
use axum::routing::{delete, get, post, put};
use kapelle_application::{AuthorizationService, InventoryService, RolePermissionTable};
use kapelle_core::AppError;
use kapelle_infrastructure::InMemoryInventoryRepository;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let frontend_url =
        env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned());
    let api_host = env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
    let api_port = env::var("API_PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(3001);
    let seed_enabled = env::var("DEV_SEED")
        .unwrap_or_else(|_| "false".to_owned())
        .eq_ignore_ascii_case("true");

    let repository = Arc::new(InMemoryInventoryRepository::new());
    let authorization_service = AuthorizationService::new(RolePermissionTable::club_defaults());
    let inventory_service = InventoryService::new(repository, authorization_service);

    let app_state = AppState { inventory_service };

    if seed_enabled {
        dev_seed::run(&app_state).await?;
        info!("dev seed inventory loaded");
    }

    let protected_routes = Router::new()
        .route(
            "/api/inventory/clothing",
            get(handlers::inventory::list_clothing_pools_handler)
                .post(handlers::inventory::create_clothing_pool_handler),
        )
        .route(
            "/api/inventory/clothing/{pool_id}/quantity",
            put(handlers::inventory::adjust_clothing_quantity_handler),
        )
        .route(
            "/api/inventory/clothing/{pool_id}/assignments",
            post(handlers::inventory::assign_clothing_handler),
        )
        .route(
            "/api/inventory/clothing/{pool_id}/assignments/{assignee}",
            delete(handlers::inventory::unassign_clothing_handler),
        )
        .route(
            "/api/inventory/instruments",
            get(handlers::inventory::list_instruments_handler)
                .post(handlers::inventory::create_instrument_handler),
        )
        .route(
            "/api/inventory/instruments/{instrument_id}/condition",
            put(handlers::inventory::update_instrument_condition_handler),
        )
        .route(
            "/api/inventory/instruments/{instrument_id}/assignment",
            put(handlers::inventory::assign_instrument_handler)
                .delete(handlers::inventory::unassign_instrument_handler),
        )
        .route_layer(from_fn(middleware::require_actor));

    let cors_layer = CorsLayer::new()
        .allow_origin(
            HeaderValue::from_str(&frontend_url)
                .map_err(|error| AppError::Internal(format!("invalid FRONTEND_URL: {error}")))?,
        )
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            CONTENT_TYPE,
            HeaderName::from_static(middleware::ACTOR_SUBJECT_HEADER),
            HeaderName::from_static(middleware::ACTOR_ROLE_HEADER),
        ]);

    let app = Router::new()
        .route("/health", get(handlers::health::health_handler))
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(app_state);

    let host = IpAddr::from_str(&api_host)
        .map_err(|error| AppError::Internal(format!("invalid API_HOST '{api_host}': {error}")))?;
    let address = SocketAddr::from((host, api_port));

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    info!(%address, "kapelle-api listening");

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("api server error: {error}")))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}
