pub mod api;
pub mod auth;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod filters;
pub mod models;
pub mod session;

pub use client::{ApiClient, RequestOptions};
pub use error::{ClientError, ClientResult, SessionError};
pub use models::ApiEnvelope;
pub use session::{FileSessionStore, MemorySessionStore, SessionStore};
