//! Game data repository for database operations.
//!
//! List columns are stored as JSON arrays of strings. Every row leaving this module is
//! decoded into a `Game`, and every list entering it is encoded with `encode_list`.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Query},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::{
    model::advanced::TopMetric,
    server::{
        error::AppError,
        model::game::{
            encode_list, encode_list_entry, CreateGameParams, Game, GameFilter, GameSortColumn,
            MiscFields, UpdateGameParams,
        },
        util::pagination::PageParams,
    },
};

/// Row order of the main catalog listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOrder {
    AppidAsc,
    PositiveDesc,
}

pub struct GameRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn decode_all(entities: Vec<entity::game::Model>) -> Result<Vec<Game>, AppError> {
        entities.into_iter().map(Game::from_entity).collect()
    }

    /// Finds a game by appid.
    ///
    /// # Returns
    /// - `Ok(Some(Game))` - Game found
    /// - `Ok(None)` - No game with that appid
    /// - `Err(AppError)` - Database error or malformed list column
    pub async fn find_by_appid(&self, appid: i64) -> Result<Option<Game>, AppError> {
        entity::prelude::Game::find_by_id(appid)
            .one(self.db)
            .await?
            .map(Game::from_entity)
            .transpose()
    }

    pub async fn exists(&self, appid: i64) -> Result<bool, AppError> {
        let count = entity::prelude::Game::find_by_id(appid)
            .count(self.db)
            .await?;
        Ok(count > 0)
    }

    /// Gets one page of the catalog.
    ///
    /// # Returns
    /// - `Ok((games, total))` - Games on the requested page and total number of games
    /// - `Err(AppError)` - Database error or malformed list column
    pub async fn get_paginated(
        &self,
        order: ListOrder,
        params: &PageParams,
    ) -> Result<(Vec<Game>, u64), AppError> {
        let query = match order {
            ListOrder::AppidAsc => {
                entity::prelude::Game::find().order_by_asc(entity::game::Column::Appid)
            }
            ListOrder::PositiveDesc => entity::prelude::Game::find()
                .order_by_desc(entity::game::Column::Positive)
                .order_by_asc(entity::game::Column::Appid),
        };

        let paginator = query.paginate(self.db, params.page_size());
        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(params.index()).await?;

        Ok((Self::decode_all(entities)?, total))
    }

    /// Gets every game ordered by appid.
    pub async fn get_all(&self) -> Result<Vec<Game>, AppError> {
        let entities = entity::prelude::Game::find()
            .order_by_asc(entity::game::Column::Appid)
            .all(self.db)
            .await?;

        Self::decode_all(entities)
    }

    /// Gets games that may match the filter, in the requested order.
    ///
    /// Text criteria are applied as SQL substring matches, which over-selects for the
    /// list columns. Callers refine the result with whole-word matching.
    pub async fn get_filter_candidates(&self, filter: &GameFilter) -> Result<Vec<Game>, AppError> {
        use entity::game::Column;

        let mut query = entity::prelude::Game::find();

        if let Some(name) = &filter.name {
            query = query.filter(Column::Name.contains(name));
        }
        if let Some(genre) = &filter.genre {
            query = query.filter(Column::Genres.contains(genre));
        }
        if let Some(tag) = &filter.tag {
            query = query.filter(Column::Tags.contains(tag));
        }
        if let Some(developer) = &filter.developer {
            query = query.filter(Column::Developers.contains(developer));
        }
        if let Some(language) = &filter.language {
            query = query.filter(Column::SupportedLanguages.contains(language));
        }
        if let Some(min) = filter.price_min {
            query = query.filter(Column::Price.gte(min));
        }
        if let Some(max) = filter.price_max {
            query = query.filter(Column::Price.lte(max));
        }
        if let Some(min) = filter.metacritic_min {
            query = query.filter(Column::MetacriticScore.gte(min));
        }

        let column = match filter.sort_by {
            GameSortColumn::Name => Column::Name,
            GameSortColumn::Appid => Column::Appid,
            GameSortColumn::Price => Column::Price,
            GameSortColumn::ReleaseDate => Column::ReleaseDate,
            GameSortColumn::PeakCcu => Column::PeakCcu,
            GameSortColumn::MetacriticScore => Column::MetacriticScore,
        };
        let order = if filter.descending {
            Order::Desc
        } else {
            Order::Asc
        };

        let entities = query
            .order_by(column, order)
            .order_by_asc(Column::Appid)
            .all(self.db)
            .await?;

        Self::decode_all(entities)
    }

    /// Inserts a new game.
    ///
    /// # Returns
    /// - `Ok(Game)` - The created game
    /// - `Err(AppError::DbErr)` - Database error, including a duplicate appid
    pub async fn create(&self, params: CreateGameParams) -> Result<Game, AppError> {
        let entity = entity::game::ActiveModel {
            appid: ActiveValue::Set(params.appid),
            name: ActiveValue::Set(params.name),
            release_date: ActiveValue::Set(params.release_date),
            price: ActiveValue::Set(params.price),
            short_description: ActiveValue::Set(params.short_description),
            detailed_description: ActiveValue::Set(None),
            about_the_game: ActiveValue::Set(None),
            header_image: ActiveValue::Set(None),
            website: ActiveValue::Set(None),
            support_url: ActiveValue::Set(None),
            developers: ActiveValue::Set(encode_list(&params.developers)?),
            publishers: ActiveValue::Set(encode_list(&params.publishers)?),
            genres: ActiveValue::Set(encode_list(&params.genres)?),
            tags: ActiveValue::Set(encode_list(&params.tags)?),
            supported_languages: ActiveValue::Set(encode_list(&params.supported_languages)?),
            screenshots: ActiveValue::Set(encode_list(&[])?),
            movies: ActiveValue::Set(encode_list(&[])?),
            positive: ActiveValue::Set(0),
            negative: ActiveValue::Set(0),
            pct_pos_total: ActiveValue::Set(None),
            metacritic_score: ActiveValue::Set(0),
            peak_ccu: ActiveValue::Set(params.peak_ccu),
            average_playtime_forever: ActiveValue::Set(0),
            median_playtime_forever: ActiveValue::Set(0),
            average_playtime_2weeks: ActiveValue::Set(0),
            median_playtime_2weeks: ActiveValue::Set(0),
            created_by: ActiveValue::Set(Some(params.created_by)),
            created_at: ActiveValue::Set(Utc::now()),
            last_modified_by: ActiveValue::Set(None),
            last_modified_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await?;

        Game::from_entity(entity)
    }

    /// Inserts already normalized rows, used by the catalog import.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of rows inserted
    pub async fn insert_many(&self, games: Vec<entity::game::ActiveModel>) -> Result<u64, AppError> {
        let mut inserted = 0;
        for chunk in games.chunks(200) {
            entity::prelude::Game::insert_many(chunk.to_vec())
                .exec(self.db)
                .await?;
            inserted += chunk.len() as u64;
        }
        Ok(inserted)
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Game))` - The updated game
    /// - `Ok(None)` - No game with that appid
    pub async fn update(
        &self,
        appid: i64,
        params: UpdateGameParams,
    ) -> Result<Option<Game>, AppError> {
        let Some(entity) = entity::prelude::Game::find_by_id(appid)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::game::ActiveModel = entity.into();

        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(release_date) = params.release_date {
            active.release_date = ActiveValue::Set(release_date);
        }
        if let Some(price) = params.price {
            active.price = ActiveValue::Set(price);
        }
        if let Some(short_description) = params.short_description {
            active.short_description = ActiveValue::Set(Some(short_description));
        }
        if let Some(developers) = params.developers {
            active.developers = ActiveValue::Set(encode_list(&developers)?);
        }
        if let Some(publishers) = params.publishers {
            active.publishers = ActiveValue::Set(encode_list(&publishers)?);
        }
        if let Some(genres) = params.genres {
            active.genres = ActiveValue::Set(encode_list(&genres)?);
        }
        if let Some(tags) = params.tags {
            active.tags = ActiveValue::Set(encode_list(&tags)?);
        }
        if let Some(languages) = params.supported_languages {
            active.supported_languages = ActiveValue::Set(encode_list(&languages)?);
        }
        if let Some(peak_ccu) = params.peak_ccu {
            active.peak_ccu = ActiveValue::Set(peak_ccu);
        }
        if let Some(positive) = params.positive {
            active.positive = ActiveValue::Set(positive);
        }
        if let Some(negative) = params.negative {
            active.negative = ActiveValue::Set(negative);
        }
        if let Some(score) = params.metacritic_score {
            active.metacritic_score = ActiveValue::Set(score);
        }
        active.last_modified_by = ActiveValue::Set(Some(params.modified_by));
        active.last_modified_at = ActiveValue::Set(Some(Utc::now()));

        let entity = active.update(self.db).await?;
        Game::from_entity(entity).map(Some)
    }

    /// Deletes a game together with its reviews.
    ///
    /// # Returns
    /// - `Ok(true)` - Game deleted
    /// - `Ok(false)` - No game with that appid
    pub async fn delete(&self, appid: i64) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        entity::prelude::Review::delete_many()
            .filter(entity::review::Column::Appid.eq(appid))
            .exec(&txn)
            .await?;
        let result = entity::prelude::Game::delete_by_id(appid).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets one page of games that have at least one review, ordered by appid.
    pub async fn get_reviewed_paginated(
        &self,
        params: &PageParams,
    ) -> Result<(Vec<Game>, u64), AppError> {
        let reviewed = Query::select()
            .column(entity::review::Column::Appid)
            .from(entity::review::Entity)
            .to_owned();

        let paginator = entity::prelude::Game::find()
            .filter(entity::game::Column::Appid.in_subquery(reviewed))
            .order_by_asc(entity::game::Column::Appid)
            .paginate(self.db, params.page_size());
        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(params.index()).await?;

        Ok((Self::decode_all(entities)?, total))
    }

    /// Gets one page of games, newest created first.
    pub async fn get_newest_paginated(
        &self,
        params: &PageParams,
    ) -> Result<(Vec<Game>, u64), AppError> {
        let paginator = entity::prelude::Game::find()
            .order_by_desc(entity::game::Column::CreatedAt)
            .order_by_desc(entity::game::Column::Appid)
            .paginate(self.db, params.page_size());
        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(params.index()).await?;

        Ok((Self::decode_all(entities)?, total))
    }

    /// Inserts a game carrying only a name and misc fields.
    pub async fn create_misc(
        &self,
        appid: i64,
        name: String,
        fields: MiscFields,
        created_by: String,
    ) -> Result<Game, AppError> {
        let params = CreateGameParams {
            appid,
            name,
            release_date: String::new(),
            price: 0.0,
            short_description: None,
            developers: Vec::new(),
            publishers: Vec::new(),
            genres: fields.genres.unwrap_or_default(),
            tags: fields.tags.unwrap_or_default(),
            supported_languages: fields.supported_languages.unwrap_or_default(),
            peak_ccu: fields.peak_ccu.unwrap_or(0),
            created_by,
        };

        self.create(params).await
    }

    /// Replaces the given misc fields of a game.
    ///
    /// # Returns
    /// - `Ok(Some(Game))` - The updated game
    /// - `Ok(None)` - No game with that appid
    pub async fn update_misc(
        &self,
        appid: i64,
        fields: MiscFields,
        modified_by: Option<String>,
    ) -> Result<Option<Game>, AppError> {
        let Some(entity) = entity::prelude::Game::find_by_id(appid)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::game::ActiveModel = entity.into();
        if let Some(genres) = fields.genres {
            active.genres = ActiveValue::Set(encode_list(&genres)?);
        }
        if let Some(tags) = fields.tags {
            active.tags = ActiveValue::Set(encode_list(&tags)?);
        }
        if let Some(languages) = fields.supported_languages {
            active.supported_languages = ActiveValue::Set(encode_list(&languages)?);
        }
        if let Some(peak_ccu) = fields.peak_ccu {
            active.peak_ccu = ActiveValue::Set(peak_ccu);
        }
        if let Some(modified_by) = modified_by {
            active.last_modified_by = ActiveValue::Set(Some(modified_by));
            active.last_modified_at = ActiveValue::Set(Some(Utc::now()));
        }

        let entity = active.update(self.db).await?;
        Game::from_entity(entity).map(Some)
    }

    /// Gets games whose developers column contains `name` as a substring.
    ///
    /// `name` is JSON-escaped first so quotes and backslashes match their stored form.
    pub async fn get_by_developer_like(&self, name: &str) -> Result<Vec<Game>, AppError> {
        let needle = encode_list_entry(name)?;
        let entities = entity::prelude::Game::find()
            .filter(entity::game::Column::Developers.contains(needle))
            .order_by_asc(entity::game::Column::Appid)
            .all(self.db)
            .await?;

        Self::decode_all(entities)
    }

    /// Overwrites the developers list of a game.
    pub async fn set_developers(&self, appid: i64, developers: &[String]) -> Result<(), AppError> {
        entity::prelude::Game::update_many()
            .col_expr(
                entity::game::Column::Developers,
                Expr::value(encode_list(developers)?),
            )
            .filter(entity::game::Column::Appid.eq(appid))
            .exec(self.db)
            .await?;
        Ok(())
    }

    pub async fn set_price(&self, appid: i64, price: f64) -> Result<(), AppError> {
        entity::prelude::Game::update_many()
            .col_expr(entity::game::Column::Price, Expr::value(price))
            .filter(entity::game::Column::Appid.eq(appid))
            .exec(self.db)
            .await?;
        Ok(())
    }

    pub async fn count(&self) -> Result<u64, AppError> {
        Ok(entity::prelude::Game::find().count(self.db).await?)
    }

    /// Mean price over all games, `None` for an empty catalog.
    pub async fn average_price(&self) -> Result<Option<f64>, AppError> {
        let prices: Vec<f64> = entity::prelude::Game::find()
            .select_only()
            .column(entity::game::Column::Price)
            .into_tuple()
            .all(self.db)
            .await?;

        if prices.is_empty() {
            return Ok(None);
        }
        Ok(Some(prices.iter().sum::<f64>() / prices.len() as f64))
    }

    /// Game with the highest peak player count, ignoring games without one.
    pub async fn top_peak(&self) -> Result<Option<Game>, AppError> {
        entity::prelude::Game::find()
            .filter(entity::game::Column::PeakCcu.gt(0))
            .order_by_desc(entity::game::Column::PeakCcu)
            .one(self.db)
            .await?
            .map(Game::from_entity)
            .transpose()
    }

    /// Gets the `limit` highest ranked games by `metric`.
    pub async fn top_by(&self, metric: TopMetric, limit: u64) -> Result<Vec<Game>, AppError> {
        let column = match metric {
            TopMetric::Positive => entity::game::Column::Positive,
            TopMetric::MetacriticScore => entity::game::Column::MetacriticScore,
            TopMetric::PeakCcu => entity::game::Column::PeakCcu,
        };

        let entities = entity::prelude::Game::find()
            .order_by_desc(column)
            .order_by_asc(entity::game::Column::Appid)
            .limit(limit)
            .all(self.db)
            .await?;

        Self::decode_all(entities)
    }

    /// Gets up to `limit` games with a price above zero, ordered by appid.
    pub async fn get_paid(&self, limit: u64) -> Result<Vec<Game>, AppError> {
        let entities = entity::prelude::Game::find()
            .filter(entity::game::Column::Price.gt(0.0))
            .order_by_asc(entity::game::Column::Appid)
            .limit(limit)
            .all(self.db)
            .await?;

        Self::decode_all(entities)
    }

    /// Appids of every game, for background jobs.
    pub async fn get_all_appids(&self) -> Result<Vec<i64>, AppError> {
        let appids = entity::prelude::Game::find()
            .select_only()
            .column(entity::game::Column::Appid)
            .order_by_asc(entity::game::Column::Appid)
            .into_tuple()
            .all(self.db)
            .await?;
        Ok(appids)
    }
}
