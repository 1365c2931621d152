pub mod client;

pub use client::DataGovClient;
