use std::{
    collections::{HashMap, VecDeque},
    sync::LazyLock,
};

use sea_orm::{ActiveEnum, Iterable};
use serde::Serialize;

use crate::error::Error;

static CATALOG: LazyLock<SchemaCatalog> = LazyLock::new(super::tables::build);

/// The process-wide schema catalog.
pub fn catalog() -> &'static SchemaCatalog {
    &CATALOG
}

/// Closed set of literals an enum column accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumDef {
    pub name: &'static str,
    pub literals: Vec<String>,
}

impl EnumDef {
    /// Collects the persisted literals of a string-backed active enum.
    pub fn of<E>(name: &'static str) -> Self
    where
        E: ActiveEnum<Value = String> + Iterable,
    {
        Self {
            name,
            literals: E::iter().map(|variant| variant.to_value()).collect(),
        }
    }

    pub fn accepts(&self, literal: &str) -> bool {
        self.literals.iter().any(|l| l == literal)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "enum", rename_all = "snake_case")]
pub enum ColumnKind {
    Integer,
    Double,
    String,
    Timestamp,
    Enum(EnumDef),
}

impl ColumnKind {
    /// SQL-ish type name used in diagrams.
    pub fn type_name(&self) -> &'static str {
        match self {
            ColumnKind::Integer => "INTEGER",
            ColumnKind::Double => "DOUBLE",
            ColumnKind::String => "VARCHAR",
            ColumnKind::Timestamp => "TIMESTAMP",
            ColumnKind::Enum(_) => "ENUM",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnDefault {
    CurrentTimestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDef {
    pub name: &'static str,
    pub kind: ColumnKind,
    pub nullable: bool,
    pub unique: bool,
    pub primary_key: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<ColumnDefault>,
}

impl ColumnDef {
    fn new(name: &'static str, kind: ColumnKind) -> Self {
        Self {
            name,
            kind,
            nullable: false,
            unique: false,
            primary_key: false,
            default: None,
        }
    }

    /// Whether an insert must supply a value for this column.
    pub fn is_required(&self) -> bool {
        !self.nullable && !self.primary_key && self.default.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeletePolicy {
    Restrict,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForeignKeyDef {
    pub column: &'static str,
    pub references_table: &'static str,
    pub references_column: &'static str,
    pub on_delete: DeletePolicy,
}

/// Shape of a single table.
///
/// The builder methods mirror the `sea-orm-migration` schema helpers the migrations are
/// written with (`integer`, `double_null`, `string_uniq`, ...), so both read alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableDef {
    pub name: &'static str,
    pub columns: Vec<ColumnDef>,
    pub foreign_keys: Vec<ForeignKeyDef>,
    /// Composite uniqueness constraints, each a list of column names.
    pub unique: Vec<Vec<&'static str>>,
    pub association: bool,
}

impl TableDef {
    /// Starts a table with its surrogate `id` key.
    pub fn new(name: &'static str) -> Self {
        let mut id = ColumnDef::new("id", ColumnKind::Integer);
        id.primary_key = true;

        Self {
            name,
            columns: vec![id],
            foreign_keys: Vec::new(),
            unique: Vec::new(),
            association: false,
        }
    }

    /// Many-to-many link table between `left` and `right`, unique over the pair.
    pub fn association(
        name: &'static str,
        left: (&'static str, &'static str),
        right: (&'static str, &'static str),
    ) -> Self {
        let mut table = Self::new(name)
            .integer(left.0)
            .integer(right.0)
            .references(left.0, left.1)
            .references(right.0, right.1)
            .unique_together(&[left.0, right.0]);
        table.association = true;
        table
    }

    fn push(mut self, column: ColumnDef) -> Self {
        self.columns.push(column);
        self
    }

    fn push_null(self, name: &'static str, kind: ColumnKind) -> Self {
        let mut column = ColumnDef::new(name, kind);
        column.nullable = true;
        self.push(column)
    }

    pub fn integer(self, name: &'static str) -> Self {
        self.push(ColumnDef::new(name, ColumnKind::Integer))
    }

    pub fn integer_null(self, name: &'static str) -> Self {
        self.push_null(name, ColumnKind::Integer)
    }

    pub fn double(self, name: &'static str) -> Self {
        self.push(ColumnDef::new(name, ColumnKind::Double))
    }

    pub fn double_null(self, name: &'static str) -> Self {
        self.push_null(name, ColumnKind::Double)
    }

    pub fn string(self, name: &'static str) -> Self {
        self.push(ColumnDef::new(name, ColumnKind::String))
    }

    pub fn string_null(self, name: &'static str) -> Self {
        self.push_null(name, ColumnKind::String)
    }

    pub fn string_uniq(self, name: &'static str) -> Self {
        let mut column = ColumnDef::new(name, ColumnKind::String);
        column.unique = true;
        self.push(column)
    }

    pub fn timestamp(self, name: &'static str) -> Self {
        self.push(ColumnDef::new(name, ColumnKind::Timestamp))
    }

    pub fn timestamp_null(self, name: &'static str) -> Self {
        self.push_null(name, ColumnKind::Timestamp)
    }

    /// Timestamp defaulting to the current time when omitted.
    pub fn timestamp_now(self, name: &'static str) -> Self {
        let mut column = ColumnDef::new(name, ColumnKind::Timestamp);
        column.default = Some(ColumnDefault::CurrentTimestamp);
        self.push(column)
    }

    pub fn enumeration(self, name: &'static str, def: EnumDef) -> Self {
        self.push(ColumnDef::new(name, ColumnKind::Enum(def)))
    }

    /// Declares `column` a foreign key to `table.id`.
    pub fn references(mut self, column: &'static str, table: &'static str) -> Self {
        self.foreign_keys.push(ForeignKeyDef {
            column,
            references_table: table,
            references_column: "id",
            on_delete: DeletePolicy::Restrict,
        });
        self
    }

    pub fn unique_together(mut self, columns: &[&'static str]) -> Self {
        self.unique.push(columns.to_vec());
        self
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn foreign_key(&self, column: &str) -> Option<&ForeignKeyDef> {
        self.foreign_keys.iter().find(|fk| fk.column == column)
    }

    pub fn required_columns(&self) -> impl Iterator<Item = &ColumnDef> {
        self.columns.iter().filter(|c| c.is_required())
    }
}

/// A foreign-key edge between two tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from_table: &'static str,
    pub from_column: &'static str,
    pub to_table: &'static str,
    pub to_column: &'static str,
    pub nullable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaCatalog {
    tables: Vec<TableDef>,
}

impl SchemaCatalog {
    pub fn new(tables: Vec<TableDef>) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &[TableDef] {
        &self.tables
    }

    pub fn table(&self, name: &str) -> Option<&TableDef> {
        self.tables.iter().find(|t| t.name == name)
    }

    pub fn association_tables(&self) -> impl Iterator<Item = &TableDef> {
        self.tables.iter().filter(|t| t.association)
    }

    /// Every foreign-key edge, in table then column order.
    pub fn edges(&self) -> Vec<Edge> {
        self.tables
            .iter()
            .flat_map(|table| {
                table.foreign_keys.iter().map(move |fk| Edge {
                    from_table: table.name,
                    from_column: fk.column,
                    to_table: fk.references_table,
                    to_column: fk.references_column,
                    nullable: table.column(fk.column).is_some_and(|c| c.nullable),
                })
            })
            .collect()
    }

    /// Checks that every foreign key points at a declared table and column.
    pub fn validate(&self) -> Result<(), Error> {
        for edge in self.edges() {
            let target = self
                .table(edge.to_table)
                .ok_or_else(|| Error::UnknownTable(edge.to_table.to_string()))?;

            if target.column(edge.to_column).is_none() {
                return Err(Error::UnknownColumn {
                    table: edge.to_table.to_string(),
                    column: edge.to_column.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Tables ordered so that every referenced table precedes the tables referencing it.
    ///
    /// Ties keep catalog order, so the result is stable.
    pub fn dependency_order(&self) -> Result<Vec<&TableDef>, Error> {
        let index: HashMap<&str, usize> = self
            .tables
            .iter()
            .enumerate()
            .map(|(i, t)| (t.name, i))
            .collect();

        let mut in_degree = vec![0usize; self.tables.len()];
        let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); self.tables.len()];

        for (i, table) in self.tables.iter().enumerate() {
            for fk in &table.foreign_keys {
                let target = *index
                    .get(fk.references_table)
                    .ok_or_else(|| Error::UnknownTable(fk.references_table.to_string()))?;

                // Self-references do not constrain creation order.
                if target != i {
                    in_degree[i] += 1;
                    dependents[target].push(i);
                }
            }
        }

        let mut ready: VecDeque<usize> = (0..self.tables.len())
            .filter(|&i| in_degree[i] == 0)
            .collect();
        let mut ordered = Vec::with_capacity(self.tables.len());

        while let Some(i) = ready.pop_front() {
            ordered.push(&self.tables[i]);

            let mut unlocked = Vec::new();
            for &dependent in &dependents[i] {
                in_degree[dependent] -= 1;
                if in_degree[dependent] == 0 {
                    unlocked.push(dependent);
                }
            }
            unlocked.sort_unstable();
            ready.extend(unlocked);
        }

        if ordered.len() != self.tables.len() {
            let stuck = self
                .tables
                .iter()
                .enumerate()
                .filter(|(i, _)| in_degree[*i] > 0)
                .map(|(_, t)| t.name.to_string())
                .collect();

            return Err(Error::DependencyCycle(stuck));
        }

        Ok(ordered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(tables: &[&'a TableDef]) -> Vec<&'a str> {
        tables.iter().map(|t| t.name).collect()
    }

    /// Expect referenced tables to be ordered before the tables pointing at them
    #[test]
    fn dependency_order_places_parents_first() {
        let catalog = SchemaCatalog::new(vec![
            TableDef::association("link", ("a_id", "a"), ("b_id", "b")),
            TableDef::new("b").integer("a_id").references("a_id", "a"),
            TableDef::new("a"),
        ]);

        let ordered = catalog.dependency_order().unwrap();

        assert_eq!(names(&ordered), vec!["a", "b", "link"]);
    }

    /// Expect a cycle to be reported with every table stuck in it
    #[test]
    fn dependency_order_rejects_cycles() {
        let catalog = SchemaCatalog::new(vec![
            TableDef::new("a").integer("b_id").references("b_id", "b"),
            TableDef::new("b").integer("a_id").references("a_id", "a"),
            TableDef::new("c"),
        ]);

        let result = catalog.dependency_order();

        match result {
            Err(Error::DependencyCycle(tables)) => assert_eq!(tables, vec!["a", "b"]),
            other => panic!("expected a dependency cycle, got {other:?}"),
        }
    }

    #[test]
    fn dependency_order_ignores_self_references() {
        let catalog = SchemaCatalog::new(vec![TableDef::new("staff")
            .integer_null("reports_to")
            .references("reports_to", "staff")]);

        assert_eq!(names(&catalog.dependency_order().unwrap()), vec!["staff"]);
    }

    #[test]
    fn validate_rejects_dangling_reference() {
        let catalog =
            SchemaCatalog::new(vec![TableDef::new("a").integer("x_id").references("x_id", "x")]);

        assert!(matches!(catalog.validate(), Err(Error::UnknownTable(t)) if t == "x"));
    }

    #[test]
    fn validate_rejects_reference_to_missing_column() {
        let mut child = TableDef::new("child").integer("parent_code");
        child.foreign_keys.push(ForeignKeyDef {
            column: "parent_code",
            references_table: "parent",
            references_column: "code",
            on_delete: DeletePolicy::Restrict,
        });
        let catalog = SchemaCatalog::new(vec![TableDef::new("parent"), child]);

        assert!(matches!(
            catalog.validate(),
            Err(Error::UnknownColumn { ref table, ref column }) if table == "parent" && column == "code"
        ));
    }

    #[test]
    fn association_is_unique_over_its_pair() {
        let table = TableDef::association("film_planet", ("film_id", "film"), ("planet_id", "planet"));

        assert!(table.association);
        assert_eq!(table.unique, vec![vec!["film_id", "planet_id"]]);
        assert_eq!(table.foreign_keys.len(), 2);
        assert_eq!(
            table.required_columns().map(|c| c.name).collect::<Vec<_>>(),
            vec!["film_id", "planet_id"]
        );
    }

    #[test]
    fn enum_def_collects_persisted_literals() {
        let def = EnumDef::of::<entity::prelude::ColorType>("color_type");

        assert_eq!(def.literals, vec!["EYE", "HAIR", "SKIN"]);
        assert!(def.accepts("HAIR"));
        assert!(!def.accepts("hair"));
    }
}
