pub mod constants;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod schema;
pub mod site;

// Application layer and its adapters
pub mod app;
pub mod infra;
