//! Game Catalog Test Utils
//!
//! Shared helpers for repository, service and middleware tests. Tests get an
//! in-memory SQLite database with only the tables they ask for, plus a session
//! backed by the same connection pool.
//!
//! # Overview
//!
//! - **TestBuilder**: fluent builder that collects entity tables
//! - **TestContext**: the built environment holding the database and session
//! - **factory**: insert catalog rows with sensible defaults
//! - **fixture**: in-memory entity models that are never inserted
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_games() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_catalog_tables()
//!         .build()
//!         .await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let game = factory::game::create_game(db).await?;
//!     // ...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
