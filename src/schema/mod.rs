//! Read-only schema catalog.
//!
//! Describes every table, column, constraint and foreign-key edge of the catalog database
//! as plain values. The catalog is built once on first access and handed to anything that
//! needs schema metadata without a database connection, such as the diagram renderer or
//! the startup conflict check.

pub mod catalog;
mod tables;

pub use catalog::{
    catalog, ColumnDef, ColumnDefault, ColumnKind, DeletePolicy, Edge, EnumDef, ForeignKeyDef,
    SchemaCatalog, TableDef,
};
