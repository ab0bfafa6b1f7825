pub mod client;
pub mod error;
pub mod types;

pub use client::EnrichClient;
pub use error::EnrichError;
