use std::fmt::Write;

use crate::schema::{ColumnDef, SchemaCatalog, TableDef};

pub(super) fn render(catalog: &SchemaCatalog) -> Result<String, std::fmt::Error> {
    let mut out = String::from("erDiagram\n");

    for table in catalog.tables() {
        writeln!(out, "    {} {{", table.name)?;
        for column in &table.columns {
            writeln!(out, "        {}", attribute(table, column))?;
        }
        writeln!(out, "    }}")?;
    }

    for edge in catalog.edges() {
        // Many children to zero-or-one parent when nullable, exactly one otherwise
        let cardinality = if edge.nullable { "}o--o|" } else { "}o--||" };
        writeln!(
            out,
            "    {} {} {} : \"{}\"",
            edge.from_table, cardinality, edge.to_table, edge.from_column
        )?;
    }

    Ok(out)
}

fn attribute(table: &TableDef, column: &ColumnDef) -> String {
    let mut keys = Vec::new();
    if column.primary_key {
        keys.push("PK");
    }
    if table.foreign_key(column.name).is_some() {
        keys.push("FK");
    }
    if column.unique {
        keys.push("UK");
    }

    let mut line = format!("{} {}", column.kind.type_name(), column.name);
    if !keys.is_empty() {
        line.push(' ');
        line.push_str(&keys.join(", "));
    }
    if column.nullable {
        line.push_str(" \"nullable\"");
    }

    line
}

#[cfg(test)]
mod tests {
    use crate::schema::catalog;

    use super::*;

    #[test]
    fn declares_every_table() {
        let output = render(catalog()).unwrap();

        for table in catalog().tables() {
            assert!(
                output.contains(&format!("    {} {{", table.name)),
                "missing table {}",
                table.name
            );
        }
    }

    #[test]
    fn optional_homeworld_is_zero_or_one() {
        let output = render(catalog()).unwrap();

        assert!(output.contains("character }o--o| planet : \"homeworld\""));
        assert!(output.contains("species }o--|| planet : \"homeworld\""));
    }

    #[test]
    fn marks_key_columns() {
        let output = render(catalog()).unwrap();

        assert!(output.contains("INTEGER id PK"));
        assert!(output.contains("VARCHAR email UK"));
        assert!(output.contains("INTEGER film_id FK"));
    }
}
