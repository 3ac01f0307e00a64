//! Database repository layer for all domain entities.
//!
//! Repositories handle database operations for each domain in the application. They use
//! SeaORM entity models internally and return domain models, keeping the stored JSON list
//! encoding out of the service layer.

pub mod action_log;
pub mod game;
pub mod review;
pub mod user;

#[cfg(test)]
mod test;
