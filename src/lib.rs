pub mod api;
pub mod assist;
pub mod config;
pub mod logic;
pub mod model;
pub mod seed;
pub mod store;

// Export API types
pub use api::handlers;
pub use api::routes;
pub use api::AppState;

// Export logic types
pub use logic::{
    build_prerequisite_chain, compute_dashboard_stats, parse_bulk_courses, CourseDraft,
    DashboardStats, PrerequisiteChain, PrerequisiteEntry, PrerequisiteSummary,
};

// Export all model types
pub use model::*;

// Export seed module
pub use seed::load_seed_data;

// Export store types
pub use store::{MemoryStore, Store};

// Function for integration testing
pub async fn run_server() -> anyhow::Result<()> {
    use axum::serve;
    use std::sync::Arc;
    use tokio::net::TcpListener;

    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Initialize logging with INFO level only (suppress DEBUG logs)
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let config = crate::config::AppConfig::load()?;

    let store = Arc::new(crate::store::MemoryStore::default());
    crate::seed::load_seed_data(&*store).await?;

    tokio::fs::create_dir_all(&config.uploads.dir).await?;

    let state = crate::api::AppState::new(
        store,
        crate::assist::AssistClient::new(&config.assist.url),
        config.uploads.dir.clone(),
    );
    let app = crate::api::routes::create_router().with_state(state);

    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;

    serve(listener, app).await?;

    Ok(())
}
