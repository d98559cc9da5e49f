pub mod hud;
pub mod lab;
pub mod pipeline;

pub use hud::HudLine;
pub use lab::{LabState, ParameterChange};
pub use pipeline::SimulationPlugin;
