pub mod config;
pub mod defaults;
pub mod env;
pub mod platform;
pub mod utils;
