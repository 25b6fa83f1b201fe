//! Data models and static configuration shared with the embedding app.

pub mod config;
pub mod models;
pub mod stream;

pub use models::*;
pub use stream::{OuterUrlResolver, StreamResolver};
