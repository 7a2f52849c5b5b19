mod params;
mod resolver;

pub(crate) use params::Capture;
pub use params::Params;
pub(crate) use resolver::{Target, resolve};
