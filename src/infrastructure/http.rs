//! HTTP access to the history endpoint.

pub mod history_client;

pub use history_client::HistoryClient;
