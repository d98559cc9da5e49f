pub mod colormap;
pub mod config;
pub mod constants;
pub mod types;

pub use config::LabConfig;
pub use constants::*;
pub use types::*;
