use axum::serve;
use std::sync::Arc;
use tokio::net::TcpListener;
use transfer_planner::api::routes::create_router;
use transfer_planner::api::AppState;
use transfer_planner::assist::AssistClient;
use transfer_planner::config::AppConfig;
use transfer_planner::seed;
use transfer_planner::store::MemoryStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Initialize logging with explicit filter to keep request noise down
    use env_logger::Builder;
    use log::LevelFilter;

    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter_module("hyper", LevelFilter::Warn)
        .init();

    println!("Transfer Planner: Student Transfer Planning Server");

    // Load configuration
    let config = AppConfig::load()?;
    println!(
        "Configuration loaded: server={}:{}",
        config.server.host, config.server.port
    );

    let store = Arc::new(MemoryStore::default());

    println!("Loading seed data...");
    seed::load_seed_data(&*store).await?;
    println!("Seed data loaded successfully");

    tokio::fs::create_dir_all(&config.uploads.dir).await?;

    let state = AppState::new(
        store,
        AssistClient::new(&config.assist.url),
        config.uploads.dir.clone(),
    );

    run_server(create_router().with_state(state), &config).await?;

    Ok(())
}

async fn run_server(app: axum::Router, config: &AppConfig) -> anyhow::Result<()> {
    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    println!("Transfer Planner server running on http://{}", bind_address);

    serve(listener, app).await?;

    Ok(())
}
