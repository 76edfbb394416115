//! Catalog-driven row builders for exercising every table without naming its columns.

use holocron::schema::{ColumnDef, ColumnKind, TableDef};
use holocron_test_utils::prelude::*;
use sea_orm::{
    sea_query::{Alias, InsertStatement, Query},
    Value,
};

/// A value valid for `column` of `table`; foreign keys point at row 1 of their parent.
fn valid_value(table: &TableDef, column: &ColumnDef, seed: i32) -> Value {
    if table.foreign_key(column.name).is_some() {
        return Value::from(1);
    }

    match &column.kind {
        ColumnKind::Integer => Value::from(seed),
        ColumnKind::Double => Value::from(seed as f64),
        ColumnKind::String => Value::from(format!("{}-{}-{}", table.name, column.name, seed)),
        ColumnKind::Timestamp => Value::from(factory::mock_timestamp()),
        ColumnKind::Enum(def) => Value::from(def.literals[0].clone()),
    }
}

fn build_insert<F>(table: &TableDef, target: Option<&str>, mut value: F) -> InsertStatement
where
    F: FnMut(&ColumnDef) -> Value,
{
    let columns: Vec<_> = table
        .columns
        .iter()
        .filter(|c| Some(c.name) == target || (!c.primary_key && c.default.is_none()))
        .collect();

    let mut stmt = Query::insert();
    stmt.into_table(Alias::new(table.name))
        .columns(columns.iter().map(|c| Alias::new(c.name)))
        .values_panic(columns.iter().map(|c| value(c).into()));

    stmt
}

/// INSERT for one row of `table`, leaving out the primary key and any column with a
/// database default.
pub fn insert_row(table: &TableDef, seed: i32) -> InsertStatement {
    build_insert(table, None, |c| valid_value(table, c, seed))
}

/// Like [`insert_row`], but with `column` always listed and set to `value`.
pub fn insert_row_with(table: &TableDef, column: &str, value: Value, seed: i32) -> InsertStatement {
    build_insert(table, Some(column), |c| {
        if c.name == column {
            value.clone()
        } else {
            valid_value(table, c, seed)
        }
    })
}

/// Like [`insert_row`], but with `column` explicitly set to NULL.
pub fn insert_row_with_null(table: &TableDef, column: &str, seed: i32) -> InsertStatement {
    insert_row_with(table, column, Value::String(None), seed)
}
