pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod render;
pub mod search;
pub mod services;
