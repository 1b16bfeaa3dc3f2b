pub mod api;
pub mod error;
pub mod upstream;

pub use api::routes::{create_router, AppState};
pub use error::AppError;
pub use upstream::UpstreamClient;
