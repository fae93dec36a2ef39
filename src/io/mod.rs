pub mod config_io;
pub mod lock;
pub mod log;
pub mod state;
pub mod store;
pub mod watcher;
