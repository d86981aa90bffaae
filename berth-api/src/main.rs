use berth_api::{app, app_config::Config, AppState};
use berth_core::{BookingManager, SeatRegistry};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "berth_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().expect("Failed to load config");
    tracing::info!(
        "Starting Berth API with {} upper / {} lower berths",
        config.layout.upper_berths,
        config.layout.lower_berths
    );

    let registry = SeatRegistry::with_layout(config.layout.upper_berths, config.layout.lower_berths);
    let state = AppState::new(BookingManager::new(registry));

    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
