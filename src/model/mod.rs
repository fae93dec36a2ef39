pub mod board;
pub mod config;
pub mod item;
pub mod location;

pub use board::*;
pub use config::*;
pub use item::*;
pub use location::*;
