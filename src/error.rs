use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
    /// A table already exists in storage but one of its columns is missing or lacks a
    /// constraint the catalog declares for it.
    #[error(
        "Existing table `{table}` is incompatible with the catalog schema: column `{column}` {reason}"
    )]
    SchemaConflict {
        table: String,
        column: String,
        reason: &'static str,
    },
    #[error("Foreign keys form a cycle between tables: {0:?}")]
    DependencyCycle(Vec<String>),
    #[error("No table named `{0}` in the schema catalog")]
    UnknownTable(String),
    #[error("No column `{column}` on table `{table}` in the schema catalog")]
    UnknownColumn { table: String, column: String },
    #[error("Unrecognized SWAPI label {label:?} for {kind}")]
    UnknownLabel { kind: &'static str, label: String },
    #[error(transparent)]
    DbErr(#[from] DbErr),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("Failed to format diagram: {0}")]
    Fmt(#[from] std::fmt::Error),
}

impl Error {
    /// Unique / foreign-key classification of the underlying database error, if any.
    ///
    /// The error itself is never rewritten; this only inspects it.
    pub fn sql_err(&self) -> Option<SqlErr> {
        match self {
            Error::DbErr(err) => err.sql_err(),
            _ => None,
        }
    }
}
