mod errors;
mod options;
mod service;
mod shared;

pub use errors::{RouterError, RouterResult};
pub use options::{
    ConflictMode, MAX_CACHE_SIZE, RouterOptions, RouterOptionsBuilder, RouterOptionsError,
};
pub use service::Router;
pub use shared::SharedRouter;
