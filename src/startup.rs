use migration::{Migrator, MigratorTrait, SchemaManager};
use sea_orm::{
    ConnectOptions, Database, DatabaseConnection, DbBackend, FromQueryResult, Statement,
};

use crate::{config::Config, error::Error, schema::catalog};

/// Nullability and single-column uniqueness of a column as found in storage.
#[derive(Debug, FromQueryResult)]
struct StoredColumn {
    not_null: i64,
    is_unique: i64,
}

const SQLITE_COLUMN: &str = r#"
SELECT ti."notnull" AS not_null,
       EXISTS (
           SELECT 1 FROM pragma_index_list(?) il
           WHERE il."unique" = 1
             AND (SELECT count(*) FROM pragma_index_info(il.name)) = 1
             AND (SELECT ii.name FROM pragma_index_info(il.name) ii) = ti.name
       ) AS is_unique
FROM pragma_table_info(?) ti
WHERE ti.name = ?"#;

const POSTGRES_COLUMN: &str = r#"
SELECT (c.is_nullable = 'NO')::int::bigint AS not_null,
       EXISTS (
           SELECT 1 FROM information_schema.table_constraints tc
           JOIN information_schema.key_column_usage kcu
             ON kcu.constraint_schema = tc.constraint_schema
            AND kcu.constraint_name = tc.constraint_name
           WHERE tc.table_schema = c.table_schema
             AND tc.table_name = c.table_name
             AND tc.constraint_type = 'UNIQUE'
             AND kcu.column_name = c.column_name
             AND (SELECT count(*) FROM information_schema.key_column_usage k2
                  WHERE k2.constraint_schema = tc.constraint_schema
                    AND k2.constraint_name = tc.constraint_name) = 1
       )::int::bigint AS is_unique
FROM information_schema.columns c
WHERE c.table_schema = current_schema() AND c.table_name = $1 AND c.column_name = $2"#;

const MYSQL_COLUMN: &str = r#"
SELECT CAST(c.is_nullable = 'NO' AS SIGNED) AS not_null,
       CAST(EXISTS (
           SELECT 1 FROM information_schema.statistics s
           WHERE s.table_schema = c.table_schema
             AND s.table_name = c.table_name
             AND s.column_name = c.column_name
             AND s.non_unique = 0
             AND s.index_name <> 'PRIMARY'
             AND (SELECT count(*) FROM information_schema.statistics s2
                  WHERE s2.table_schema = s.table_schema
                    AND s2.table_name = s.table_name
                    AND s2.index_name = s.index_name) = 1
       ) AS SIGNED) AS is_unique
FROM information_schema.columns c
WHERE c.table_schema = DATABASE() AND c.table_name = ? AND c.column_name = ?"#;

/// Connect to the database configured by `DATABASE_URL`
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(config.sql_logging);

    let db = Database::connect(opt).await?;

    tracing::debug!(backend = ?db.get_database_backend(), "Connected to database");

    Ok(db)
}

async fn stored_column(
    db: &DatabaseConnection,
    table: &str,
    column: &str,
) -> Result<Option<StoredColumn>, Error> {
    let backend = db.get_database_backend();
    let stmt = match backend {
        DbBackend::Sqlite => Statement::from_sql_and_values(
            backend,
            SQLITE_COLUMN,
            [table.into(), table.into(), column.into()],
        ),
        DbBackend::Postgres => Statement::from_sql_and_values(
            backend,
            POSTGRES_COLUMN,
            [table.into(), column.into()],
        ),
        _ => Statement::from_sql_and_values(backend, MYSQL_COLUMN, [table.into(), column.into()]),
    };

    Ok(StoredColumn::find_by_statement(stmt).one(db).await?)
}

/// Verify that every catalog table already present in storage carries the catalog's columns
/// with their NOT NULL and single-column UNIQUE constraints.
///
/// Tables that do not exist yet are fine; they are created by [`materialize_schema`].
/// Primary keys and composite uniqueness are not compared.
pub async fn check_schema_conflicts(db: &DatabaseConnection) -> Result<(), Error> {
    let manager = SchemaManager::new(db);

    for table in catalog().tables() {
        if !manager.has_table(table.name).await? {
            continue;
        }

        for column in &table.columns {
            let reason = match stored_column(db, table.name, column.name).await? {
                None => Some("is missing"),
                Some(_) if column.primary_key => None,
                Some(stored) if !column.nullable && stored.not_null == 0 => Some("accepts NULL"),
                Some(stored) if column.unique && stored.is_unique == 0 => Some("is not unique"),
                Some(_) => None,
            };

            if let Some(reason) = reason {
                tracing::error!(
                    table = table.name,
                    column = column.name,
                    reason,
                    "Existing table conflicts with catalog schema"
                );

                return Err(Error::SchemaConflict {
                    table: table.name.to_string(),
                    column: column.name.to_string(),
                    reason,
                });
            }
        }
    }

    Ok(())
}

/// Create every catalog table, constraint and index that does not exist yet.
///
/// Idempotent: applied migrations are recorded and skipped on later runs. Existing data is
/// never touched, and an incompatible pre-existing table aborts before anything is created.
pub async fn materialize_schema(db: &DatabaseConnection) -> Result<(), Error> {
    let pending = Migrator::get_pending_migrations(db).await?;
    if pending.is_empty() {
        tracing::info!("Schema is up to date");
        return Ok(());
    }

    check_schema_conflicts(db).await?;

    tracing::info!(pending = pending.len(), "Applying schema migrations");
    Migrator::up(db, None).await?;

    Ok(())
}
