//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. List columns are decoded here, so
//! services work with typed values rather than stored JSON text.

pub mod action_log;
pub mod game;
pub mod review;
pub mod user;
