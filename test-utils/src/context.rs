use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// A built test environment.
///
/// The database is connected by `TestBuilder::build()`. The session is created on
/// first use and stored in the same in-memory database.
pub struct TestContext {
    /// In-memory SQLite connection, `None` until first requested.
    pub db: Option<DatabaseConnection>,

    /// Session stored through `tower-sessions-sqlx-store`, `None` until first requested.
    pub session: Option<Session>,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
        }
    }

    /// Returns the database connection, connecting on first call.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - The shared in-memory connection
    /// - `Err(TestError::Database)` - Connection failed
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            let db = Database::connect("sqlite::memory:").await?;
            self.db = Some(db);
        }

        self.db
            .as_ref()
            .ok_or_else(|| sea_orm::DbErr::Custom("database not initialized".to_string()).into())
    }

    /// Executes the given CREATE TABLE statements in order.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Returns the test session, creating the session table on first call.
    ///
    /// # Returns
    /// - `Ok(&Session)` - Session with a 7-day inactivity expiry
    /// - `Err(TestError)` - Database or session store setup failed
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        if self.session.is_none() {
            let db = self.database().await?;

            let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
            store
                .migrate()
                .await
                .map_err(|e| TestError::SessionStore(e.to_string()))?;

            self.session = Some(Session::new(
                None,
                Arc::new(store),
                Some(Expiry::OnInactivity(Duration::days(7))),
            ));
        }

        self.session
            .as_ref()
            .ok_or_else(|| TestError::SessionStore("session not initialized".to_string()))
    }

    /// Returns both the database and the session.
    ///
    /// Calling `database()` and `session()` separately would hold two mutable
    /// borrows of the context.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.database().await?;
        self.session().await?;

        match (self.db.as_ref(), self.session.as_ref()) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => Err(TestError::SessionStore("context not initialized".to_string())),
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
