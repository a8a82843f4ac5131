use flightdeck::server::{config::Config, error::Error, model::app::AppState, router, startup};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = serve(config).await {
        tracing::error!("Server stopped: {}", e);
        std::process::exit(1);
    }
}

async fn serve(config: Config) -> Result<(), Error> {
    let http_client = startup::build_http_client(&config)?;
    let session = startup::connect_to_session(&config).await?;
    let db = startup::connect_to_database(&config).await?;

    let state = AppState::new(db, http_client, &config);
    let app = router::routes().with_state(state).layer(session);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;

    tracing::info!("Starting server on {}", config.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
