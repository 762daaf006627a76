//! Browser-facing adapters: HTTP history, websocket feed, canvas surface,
//! console logging.

pub mod dto;
pub mod http;
pub mod rendering;
pub mod services;
pub mod websocket;
