pub mod api;
pub mod config;
pub mod constants;
pub mod errors;
pub mod logger;
pub mod session;
pub mod transition_guard;
pub mod types;
pub mod utils;
