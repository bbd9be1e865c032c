// Screen state and mock data, shared by the binary and the tests
pub mod app;
pub mod call;
pub mod chat;
pub mod config;
pub mod dashboard;
pub mod directory;
pub mod error;
pub mod landing;
pub mod models;
pub mod relationship;
pub mod seed;
pub mod transcript;

// Re-export main types for convenience
pub use app::{App, Route, Screen};
pub use error::{ConfigError, SeedError};
pub use models::*;
