pub mod app;
pub mod drag;
pub mod input;
pub mod render;
pub mod targets;
pub mod theme;

pub use app::run;
