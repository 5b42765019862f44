pub mod config;
pub mod core;
pub mod gate;
pub mod logging;
