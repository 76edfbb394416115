use holocron::{config::Config, error::Error, startup::connect_to_database};
use sea_orm::{ConnectionTrait, DbBackend};

/// Tests connecting to an in-memory SQLite database.
///
/// Expected: Ok with a SQLite connection
#[tokio::test]
async fn connects_to_sqlite() {
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        sql_logging: false,
    };

    let db = connect_to_database(&config).await.unwrap();

    assert_eq!(db.get_database_backend(), DbBackend::Sqlite);
}

/// Tests that an unsupported URL scheme is reported as a database error.
///
/// Expected: Err with DbErr
#[tokio::test]
async fn fails_for_unsupported_url() {
    let config = Config {
        database_url: "redis://127.0.0.1:6379".to_string(),
        sql_logging: false,
    };

    let result = connect_to_database(&config).await;

    assert!(matches!(result, Err(Error::DbErr(_))));
}
