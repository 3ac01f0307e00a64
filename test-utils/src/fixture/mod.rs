//! In-memory entity models that are never inserted into the database.
//!
//! Fixtures back the factories' default values and let unit tests build domain
//! models from entities without a database.
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let game = fixture::game::entity_builder().price(0.0).build();
//! ```

pub mod game;

pub use game::{entity as game_entity, entity_builder as game_entity_builder};
