//! Test context returned by [`TestBuilder`](crate::TestBuilder).

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test environment backed by an in-memory SQLite database.
///
/// Foreign keys are enforced on the connection, so constraint violations surface the same
/// way they would against a file-backed database.
///
/// ```ignore
/// let test = TestBuilder::new().with_schema().build().await?;
///
/// let planet = test.world().insert_mock_planet(1).await?;
/// let film = test.media().insert_mock_film(1).await?;
/// ```
pub struct TestContext {
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Open a fresh, empty in-memory database.
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db })
    }

    /// Execute CREATE TABLE statements generated from entities.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
