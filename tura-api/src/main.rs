use std::net::SocketAddr;
use std::sync::Arc;
use tura_api::generator::HttpQuoteGenerator;
use tura_api::{app, state::AuthConfig, AppState};
use tura_store::{
    DbClient, PostgresCatalogRepository, PostgresCityRepository, PostgresHotelPricingRepository,
    PostgresMealPricingRepository, PostgresOrganizationRepository, PostgresTourPricingRepository,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tura_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = tura_store::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting Tura API on port {}", config.server.port);

    let db = DbClient::new(&config.database.url)
        .await
        .expect("Failed to connect to Postgres");
    db.migrate().await.expect("Failed to run migrations");

    let generator =
        HttpQuoteGenerator::new(&config.generator).expect("Failed to build generator client");

    let app_state = AppState {
        meals: Arc::new(PostgresMealPricingRepository::new(db.pool.clone())),
        hotels: Arc::new(PostgresHotelPricingRepository::new(db.pool.clone())),
        tours: Arc::new(PostgresTourPricingRepository::new(db.pool.clone())),
        cities: Arc::new(PostgresCityRepository::new(db.pool.clone())),
        catalog: Arc::new(PostgresCatalogRepository::new(db.pool.clone())),
        organizations: Arc::new(PostgresOrganizationRepository::new(db.pool.clone())),
        generator: Arc::new(generator),
        auth: AuthConfig {
            secret: config.auth.jwt_secret.clone(),
            expiration: config.auth.jwt_expiration_seconds,
        },
        default_season: config.catalog.default_season.clone(),
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
