//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validation, ownership rules and derived statistics
//! - **Orchestration**: Coordinating repositories with the Steam proxy and token signing
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod action_log;
pub mod admin;
pub mod advanced;
pub mod auth;
pub mod catalog;
pub mod dashboard;
pub mod developer;
pub mod game;
pub mod misc;
pub mod oauth;
pub mod review;
pub mod steam;
pub mod token;

#[cfg(test)]
mod test;
