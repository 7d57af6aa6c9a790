pub mod assist_handlers;
pub mod handlers;
pub mod routes;
pub mod upload_handlers;
pub mod user_extractor;

pub use handlers::AppState;
pub use routes::create_router;
