pub mod camera;
pub mod grid;
pub mod horizon;
pub mod particles;
pub mod plugin;
pub mod ui;

pub use plugin::KerrRenderPlugin;
