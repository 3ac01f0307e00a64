//! Game factory for creating catalog rows.

use crate::factory::helpers::next_id;
use crate::fixture::{self, game::GameEntityBuilder};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr};

/// Factory for inserting games.
///
/// Defaults come from `fixture::game`, with a unique appid and name.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::game::GameFactory;
///
/// let game = GameFactory::new(&db)
///     .name("Portal 2")
///     .price(7.19)
///     .developers(&["Valve"])
///     .reviews(900, 100)
///     .build()
///     .await?;
/// ```
pub struct GameFactory<'a> {
    db: &'a DatabaseConnection,
    entity: GameEntityBuilder,
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl<'a> GameFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::game::entity_builder()
            .appid(100_000 + id as i64)
            .name(format!("Game {}", id));

        Self { db, entity }
    }

    pub fn appid(mut self, appid: i64) -> Self {
        self.entity = self.entity.appid(appid);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity = self.entity.name(name);
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.entity = self.entity.price(price);
        self
    }

    pub fn developers(mut self, developers: &[&str]) -> Self {
        self.entity = self.entity.developers(owned(developers));
        self
    }

    pub fn publishers(mut self, publishers: &[&str]) -> Self {
        self.entity = self.entity.publishers(owned(publishers));
        self
    }

    pub fn genres(mut self, genres: &[&str]) -> Self {
        self.entity = self.entity.genres(owned(genres));
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.entity = self.entity.tags(owned(tags));
        self
    }

    pub fn languages(mut self, languages: &[&str]) -> Self {
        self.entity = self.entity.supported_languages(owned(languages));
        self
    }

    /// Stores the developers column verbatim, bypassing JSON encoding.
    pub fn raw_developers(mut self, raw: impl Into<String>) -> Self {
        self.entity = self.entity.raw_developers(raw);
        self
    }

    /// Sets the storefront positive and negative review counts.
    pub fn reviews(mut self, positive: i64, negative: i64) -> Self {
        self.entity = self.entity.reviews(positive, negative);
        self
    }

    pub fn pct_pos_total(mut self, pct: Option<i32>) -> Self {
        self.entity = self.entity.pct_pos_total(pct);
        self
    }

    pub fn metacritic_score(mut self, score: i32) -> Self {
        self.entity = self.entity.metacritic_score(score);
        self
    }

    pub fn peak_ccu(mut self, peak_ccu: i64) -> Self {
        self.entity = self.entity.peak_ccu(peak_ccu);
        self
    }

    pub fn created_at(mut self, created_at: chrono::DateTime<chrono::Utc>) -> Self {
        self.entity = self.entity.created_at(created_at);
        self
    }

    /// Inserts the game.
    ///
    /// # Returns
    /// - `Ok(entity::game::Model)` - Created game
    /// - `Err(DbErr)` - Insert failed, for example on a duplicate appid
    pub async fn build(self) -> Result<entity::game::Model, DbErr> {
        entity::game::ActiveModel::from(self.entity.build())
            .reset_all()
            .insert(self.db)
            .await
    }
}

/// Creates a game with default values.
pub async fn create_game(db: &DatabaseConnection) -> Result<entity::game::Model, DbErr> {
    GameFactory::new(db).build().await
}

/// Creates a game with a specific appid.
pub async fn create_game_with_appid(
    db: &DatabaseConnection,
    appid: i64,
) -> Result<entity::game::Model, DbErr> {
    GameFactory::new(db).appid(appid).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_game_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Game).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let game = create_game(db).await?;

        assert!(game.appid > 100_000);
        assert!(game.name.starts_with("Game "));
        assert_eq!(game.developers, r#"["Valve"]"#);
        assert_eq!(game.tags, "[]");

        Ok(())
    }

    #[tokio::test]
    async fn creates_game_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Game).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let game = GameFactory::new(db)
            .appid(620)
            .name("Portal 2")
            .genres(&["Puzzle", "Action"])
            .reviews(90, 10)
            .build()
            .await?;

        assert_eq!(game.appid, 620);
        assert_eq!(game.name, "Portal 2");
        assert_eq!(game.genres, r#"["Puzzle","Action"]"#);
        assert_eq!(game.positive, 90);
        assert_eq!(game.negative, 10);

        Ok(())
    }

    #[tokio::test]
    async fn rejects_duplicate_appid() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Game).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        create_game_with_appid(db, 10).await?;
        let result = create_game_with_appid(db, 10).await;

        assert!(result.is_err());

        Ok(())
    }
}
