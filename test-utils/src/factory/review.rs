//! Review factory for creating review rows attached to a game.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for inserting reviews.
///
/// The game must already exist, `review.appid` references `game.appid`.
///
/// # Example
///
/// ```rust,ignore
/// let review = ReviewFactory::new(&db, game.appid)
///     .username("alice")
///     .rating(95)
///     .created_by(Some(user.id))
///     .build()
///     .await?;
/// ```
pub struct ReviewFactory<'a> {
    db: &'a DatabaseConnection,
    appid: i64,
    username: String,
    comment: String,
    rating: i32,
    created_by: Option<i32>,
    created_at: DateTime<Utc>,
}

impl<'a> ReviewFactory<'a> {
    /// Defaults: username `"reviewer{id}"`, comment `"Review {id}"`, rating 80,
    /// anonymous, created now.
    pub fn new(db: &'a DatabaseConnection, appid: i64) -> Self {
        let id = next_id();
        Self {
            db,
            appid,
            username: format!("reviewer{}", id),
            comment: format!("Review {}", id),
            rating: 80,
            created_by: None,
            created_at: Utc::now(),
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn rating(mut self, rating: i32) -> Self {
        self.rating = rating;
        self
    }

    /// Sets the id of the user who wrote the review.
    pub fn created_by(mut self, user_id: Option<i32>) -> Self {
        self.created_by = user_id;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::review::Model, DbErr> {
        entity::review::ActiveModel {
            id: ActiveValue::NotSet,
            appid: ActiveValue::Set(self.appid),
            username: ActiveValue::Set(self.username),
            comment: ActiveValue::Set(self.comment),
            rating: ActiveValue::Set(self.rating),
            created_by: ActiveValue::Set(self.created_by),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(None),
            updated_by: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a review with default values for a game.
pub async fn create_review(
    db: &DatabaseConnection,
    appid: i64,
) -> Result<entity::review::Model, DbErr> {
    ReviewFactory::new(db, appid).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::game::create_game;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_review_for_game() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Game)
            .with_table(Review)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let game = create_game(db).await?;
        let review = create_review(db, game.appid).await?;

        assert_eq!(review.appid, game.appid);
        assert_eq!(review.rating, 80);
        assert!(review.created_by.is_none());
        assert!(review.updated_at.is_none());

        Ok(())
    }
}
