use std::sync::Arc;
use std::time::Duration;

use auth::TokenIssuer;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_category::create_category;
use super::handlers::create_product::create_product;
use super::handlers::current_user::current_user;
use super::handlers::delete_category::delete_category;
use super::handlers::delete_product::delete_product;
use super::handlers::get_category::get_category;
use super::handlers::get_product::get_product;
use super::handlers::list_categories::list_categories;
use super::handlers::list_products::list_products;
use super::handlers::login::login;
use super::handlers::register::register;
use super::handlers::update_product::update_product;
use super::middleware::authenticate as auth_middleware;
use crate::category::ports::CategoryServicePort;
use crate::domain::user::ports::AuthServicePort;
use crate::product::ports::ProductServicePort;

/// Services are held as trait objects so the same router serves the
/// PostgreSQL and the in-memory wiring.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub product_service: Arc<dyn ProductServicePort>,
    pub category_service: Arc<dyn CategoryServicePort>,
    pub token_issuer: Arc<TokenIssuer>,
}

pub fn create_router(
    auth_service: Arc<dyn AuthServicePort>,
    product_service: Arc<dyn ProductServicePort>,
    category_service: Arc<dyn CategoryServicePort>,
    token_issuer: Arc<TokenIssuer>,
) -> Router {
    let state = AppState {
        auth_service,
        product_service,
        category_service,
        token_issuer,
    };

    let public_routes = Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register));

    let protected_routes = Router::new()
        .route("/auth/me", get(current_user))
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/:product_id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/categories", get(list_categories).post(create_category))
        .route(
            "/categories/:category_id",
            get(get_category).delete(delete_category),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
