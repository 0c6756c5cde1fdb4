//! chatline_client - HTTP client and CLI for the chatline API.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod output;

pub use client::ChatlineClient;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
