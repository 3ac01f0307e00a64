use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for test environments backed by an in-memory SQLite database.
///
/// Add the entity tables a test touches, then call `build()`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Game, Review};
///
/// let test = TestBuilder::new()
///     .with_table(Game)
///     .with_table(Review)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements, executed in insertion order.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the schema.
    ///
    /// Tables holding foreign keys must be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to generate the CREATE TABLE statement from
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every catalog table in dependency order.
    ///
    /// Creates `user`, `game`, `review` (references `game`) and `action_log`.
    /// Use this for service tests that cross repository boundaries.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_catalog_tables(self) -> Self {
        self.with_table(User)
            .with_table(Game)
            .with_table(Review)
            .with_table(ActionLog)
    }

    /// Connects the in-memory database and creates the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with database and tables ready
    /// - `Err(TestError::Database)` - Connection or table creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        context.with_tables(self.tables).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
