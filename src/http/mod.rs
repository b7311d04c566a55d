mod error;
mod handlers;
mod render;
mod router;
mod types;

pub use error::ApiError;
pub use router::{build_router, serve};
pub use types::{AppState, MappingParams};
