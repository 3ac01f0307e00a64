//! Review data repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    model::review::{CreateReviewParams, Review, UpdateReviewParams},
    util::pagination::PageParams,
};

/// A review joined with the appid and name of its game.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewWithGame {
    pub review: Review,
    pub game_appid: i64,
    pub game_name: String,
}

impl ReviewWithGame {
    fn from_pair((review, game): (entity::review::Model, Option<entity::game::Model>)) -> Self {
        let (game_appid, game_name) = match game {
            Some(game) => (game.appid, game.name),
            None => (review.appid, String::new()),
        };

        Self {
            review: Review::from_entity(review),
            game_appid,
            game_name,
        }
    }
}

pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a review.
    ///
    /// # Returns
    /// - `Ok(Review)` - The created review
    /// - `Err(DbErr)` - Database error, including an unknown appid
    pub async fn create(&self, params: CreateReviewParams) -> Result<Review, DbErr> {
        let entity = entity::review::ActiveModel {
            appid: ActiveValue::Set(params.appid),
            username: ActiveValue::Set(params.username),
            comment: ActiveValue::Set(params.comment),
            rating: ActiveValue::Set(params.rating),
            created_by: ActiveValue::Set(params.created_by),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(None),
            updated_by: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Review::from_entity(entity))
    }

    /// Finds a review by id within a game.
    ///
    /// # Returns
    /// - `Ok(Some(Review))` - Review found and belongs to `appid`
    /// - `Ok(None)` - No such review for that game
    pub async fn find(&self, appid: i64, id: i32) -> Result<Option<Review>, DbErr> {
        let entity = entity::prelude::Review::find_by_id(id)
            .filter(entity::review::Column::Appid.eq(appid))
            .one(self.db)
            .await?;

        Ok(entity.map(Review::from_entity))
    }

    /// Gets all reviews of a game, newest first.
    pub async fn get_by_appid(&self, appid: i64) -> Result<Vec<Review>, DbErr> {
        let entities = entity::prelude::Review::find()
            .filter(entity::review::Column::Appid.eq(appid))
            .order_by_desc(entity::review::Column::CreatedAt)
            .order_by_desc(entity::review::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Review::from_entity).collect())
    }

    /// Gets all reviews of the given games, newest first.
    pub async fn get_by_appids(&self, appids: &[i64]) -> Result<Vec<Review>, DbErr> {
        if appids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Review::find()
            .filter(entity::review::Column::Appid.is_in(appids.iter().copied()))
            .order_by_desc(entity::review::Column::CreatedAt)
            .order_by_desc(entity::review::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Review::from_entity).collect())
    }

    /// Ratings of every review of a game.
    pub async fn get_ratings(&self, appid: i64) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Review::find()
            .select_only()
            .column(entity::review::Column::Rating)
            .filter(entity::review::Column::Appid.eq(appid))
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Applies a partial update and stamps the editor.
    ///
    /// # Returns
    /// - `Ok(Some(Review))` - The updated review
    /// - `Ok(None)` - No such review
    pub async fn update(
        &self,
        id: i32,
        params: UpdateReviewParams,
    ) -> Result<Option<Review>, DbErr> {
        let Some(entity) = entity::prelude::Review::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::review::ActiveModel = entity.into();
        if let Some(comment) = params.comment {
            active.comment = ActiveValue::Set(comment);
        }
        if let Some(rating) = params.rating {
            active.rating = ActiveValue::Set(rating);
        }
        active.updated_at = ActiveValue::Set(Some(Utc::now()));
        active.updated_by = ActiveValue::Set(Some(params.updated_by));

        let entity = active.update(self.db).await?;
        Ok(Some(Review::from_entity(entity)))
    }

    /// Deletes a review.
    ///
    /// # Returns
    /// - `Ok(true)` - Review deleted
    /// - `Ok(false)` - No such review
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Review::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Review::find().count(self.db).await
    }

    /// Number of reviews created at or after `since`.
    pub async fn count_since(&self, since: DateTime<Utc>) -> Result<u64, DbErr> {
        entity::prelude::Review::find()
            .filter(entity::review::Column::CreatedAt.gte(since))
            .count(self.db)
            .await
    }

    /// Gets the newest reviews across all games.
    pub async fn get_recent(&self, limit: u64) -> Result<Vec<ReviewWithGame>, DbErr> {
        let pairs = entity::prelude::Review::find()
            .find_also_related(entity::prelude::Game)
            .order_by_desc(entity::review::Column::CreatedAt)
            .order_by_desc(entity::review::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(pairs.into_iter().map(ReviewWithGame::from_pair).collect())
    }

    /// Gets one page of reviews matching `search`, newest first.
    ///
    /// `search` is matched as a substring against the reviewer name, the comment and
    /// the game name.
    ///
    /// # Returns
    /// - `Ok((reviews, total))` - Reviews on the page and total matching reviews
    pub async fn search_paginated(
        &self,
        search: Option<&str>,
        params: &PageParams,
    ) -> Result<(Vec<ReviewWithGame>, u64), DbErr> {
        let mut query = entity::prelude::Review::find().find_also_related(entity::prelude::Game);

        if let Some(search) = search.map(str::trim).filter(|s| !s.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(entity::review::Column::Username.contains(search))
                    .add(entity::review::Column::Comment.contains(search))
                    .add(entity::game::Column::Name.contains(search)),
            );
        }

        let paginator = query
            .order_by_desc(entity::review::Column::CreatedAt)
            .order_by_desc(entity::review::Column::Id)
            .paginate(self.db, params.page_size());
        let total = paginator.num_items().await?;
        let pairs = paginator.fetch_page(params.index()).await?;

        Ok((
            pairs.into_iter().map(ReviewWithGame::from_pair).collect(),
            total,
        ))
    }
}
