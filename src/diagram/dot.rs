use std::fmt::Write;

use crate::schema::{ColumnDef, SchemaCatalog, TableDef};

pub(super) fn render(catalog: &SchemaCatalog) -> Result<String, std::fmt::Error> {
    let mut out = String::new();

    writeln!(out, "digraph schema {{")?;
    writeln!(out, "    rankdir=LR;")?;
    writeln!(out, "    node [shape=record, fontname=\"Helvetica\"];")?;

    for table in catalog.tables() {
        let fill = if table.association {
            ", style=filled, fillcolor=\"#eeeeee\""
        } else {
            ""
        };
        writeln!(
            out,
            "    {} [label=\"{}\"{}];",
            table.name,
            record_label(table),
            fill
        )?;
    }

    for edge in catalog.edges() {
        let style = if edge.nullable { ", style=dashed" } else { "" };
        writeln!(
            out,
            "    {} -> {} [label=\"{}\"{}];",
            edge.from_table, edge.to_table, edge.from_column, style
        )?;
    }

    writeln!(out, "}}")?;

    Ok(out)
}

fn record_label(table: &TableDef) -> String {
    let fields: String = table
        .columns
        .iter()
        .map(|column| field(table, column))
        .collect();

    format!("{{{}|{}}}", table.name, fields)
}

fn field(table: &TableDef, column: &ColumnDef) -> String {
    let mut field = format!("{} : {}", column.name, column.kind.type_name());
    if column.primary_key {
        field.push_str(" PK");
    }
    if table.foreign_key(column.name).is_some() {
        field.push_str(" FK");
    }
    if column.unique {
        field.push_str(" UNIQUE");
    }
    if !column.nullable && !column.primary_key {
        field.push_str(" NOT NULL");
    }
    field.push_str("\\l");

    field
}
