pub mod board_ops;
pub mod check;

pub use board_ops::*;
