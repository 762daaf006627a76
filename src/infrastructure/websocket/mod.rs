//! Live feed websocket listener.

pub mod feed_client;

pub use feed_client::{FeedEnd, LiveFeedClient, LiveFeedHandle, read_frames};
