pub mod enums;
pub mod matcher;
pub mod path;
pub mod pattern;
pub mod radix;
pub mod router;
pub mod types;

pub use enums::{HttpMethod, MethodMask};
pub use matcher::Params;
pub use path::{CacheStats, EvictionPolicy, Segmenter};
pub use router::{
    ConflictMode, Router, RouterError, RouterOptions, RouterOptionsBuilder, RouterOptionsError,
    RouterResult, SharedRouter,
};
pub use types::{Endpoint, MatchedRoute, RouteInfo, RouteMatch};
