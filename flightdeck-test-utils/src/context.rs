//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context includes an
//! in-memory SQLite database, a mock HTTP server standing in for the network feeds, an HTTP
//! client and a session store.

use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::{constant::TEST_USER_AGENT, error::TestError};

/// Test context structure returned by `TestBuilder`
///
/// Provides access to the test environment including:
/// - Database connection
/// - HTTP client for the mock feed server
/// - Session store
/// - Collection of mock endpoints for assertion
///
/// # Usage
///
/// ```ignore
/// let mut test = TestBuilder::new().with_table(entity::prelude::User).build().await?;
///
/// test.user().insert_user(1, "Jane Doe").await?;
///
/// let app_state: AppState = test.to_app_state();
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// HTTP client without any proxy or retry configuration
    pub http_client: reqwest::Client,
    /// Session store standing in for the host application's sessions
    pub session: Session,

    /// Mock HTTP server for the network feeds
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Convert database, HTTP client and mock server URL into any type that can be
    /// constructed from them
    ///
    /// This allows conversion to AppState without creating a circular dependency between
    /// the test-utils crate and the main flightdeck crate.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let app_state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, reqwest::Client, String)>,
    {
        T::from((self.db.clone(), self.http_client.clone(), self.server.url()))
    }
}

impl TestContext {
    /// Create a new test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::ReqwestError)` - HTTP client could not be built
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let mock_server = Server::new_async().await;

        let http_client = reqwest::Client::builder()
            .user_agent(TEST_USER_AGENT)
            .build()?;

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            server: mock_server,
            db,
            http_client,
            session,
            mocks: Vec::new(),
        })
    }

    /// Create database tables from schema statements.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
