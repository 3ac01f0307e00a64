//! Factories that insert catalog rows with sensible defaults.
//!
//! Each entity has a `Factory` builder for customization and a `create_*`
//! function for the default case.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let game = factory::game::GameFactory::new(db)
//!     .price(9.99)
//!     .reviews(120, 30)
//!     .build()
//!     .await?;
//! let review = factory::create_review(db, game.appid).await?;
//! let (game, reviews) = factory::helpers::create_game_with_reviews(db, &[90, 40]).await?;
//! ```

pub mod action_log;
pub mod game;
pub mod helpers;
pub mod review;
pub mod user;

pub use action_log::create_action_log;
pub use game::{create_game, create_game_with_appid};
pub use review::create_review;
pub use user::{create_admin, create_user};
