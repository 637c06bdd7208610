pub mod advisor_core;
pub mod config;
mod frontend;
mod global;

pub use config::Config;
pub use frontend::start_server;
