use delivery_log::shared::config::Config;
use delivery_log::shell::http::router;
use delivery_log::shell::state::AppState;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::load()?;

    // In-memory collection until a hosted document store adapter is wired in
    let state = AppState::in_memory(&config);

    let app = router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Delivery log API: http://{}", listener.local_addr()?);
    tracing::info!("GraphQL endpoint: http://{}/gql", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
        })
        .await?;
    Ok(())
}
