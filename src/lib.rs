pub mod config;
pub mod dashboard;
pub mod error;
pub mod fetch;
pub mod infra;
pub mod ingest;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod server;
pub mod services;
pub mod summary;
