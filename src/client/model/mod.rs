pub mod auth;
pub mod cache;
pub mod error;
pub mod token;
