use axum::{http::Method, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod admin;
pub mod cities;
pub mod error;
pub mod generator;
pub mod hotels;
pub mod items;
pub mod meals;
pub mod middleware;
pub mod quotes;
pub mod state;
pub mod tours;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    // CORS Middleware
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::USER_AGENT,
        ]);

    // Tenant routes: bearer token verified, organization scope injected.
    let tenant = Router::new()
        .merge(meals::routes())
        .merge(hotels::routes())
        .merge(tours::routes())
        .merge(items::routes())
        .merge(quotes::routes())
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::session_middleware,
        ));

    // Admin routes: session first, then the super-admin gate.
    let admin = admin::routes()
        .layer(axum::middleware::from_fn(
            middleware::auth::super_admin_middleware,
        ))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::session_middleware,
        ));

    Router::new()
        .merge(cities::routes())
        .merge(tenant)
        .merge(admin)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
