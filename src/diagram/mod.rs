//! Renders the schema catalog as an entity-relationship diagram.
//!
//! Rendering only reads catalog metadata; it never touches a database.

mod dot;
mod mermaid;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{
    error::Error,
    schema::{catalog, Edge, SchemaCatalog, TableDef},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DiagramFormat {
    /// Graphviz `digraph`
    Dot,
    /// Mermaid `erDiagram`
    Mermaid,
    /// Raw catalog metadata
    Json,
}

impl DiagramFormat {
    /// File extension used when writing into a directory.
    pub fn extension(&self) -> &'static str {
        match self {
            DiagramFormat::Dot => "dot",
            DiagramFormat::Mermaid => "mmd",
            DiagramFormat::Json => "json",
        }
    }
}

#[derive(Serialize)]
struct CatalogDocument<'a> {
    tables: &'a [TableDef],
    edges: Vec<Edge>,
}

/// Render `catalog` in the requested format.
pub fn render(catalog: &SchemaCatalog, format: DiagramFormat) -> Result<String, Error> {
    let output = match format {
        DiagramFormat::Dot => dot::render(catalog)?,
        DiagramFormat::Mermaid => mermaid::render(catalog)?,
        DiagramFormat::Json => {
            let document = CatalogDocument {
                tables: catalog.tables(),
                edges: catalog.edges(),
            };
            serde_json::to_string_pretty(&document)?
        }
    };

    Ok(output)
}

/// Render the process-wide catalog to `path`, returning the file written.
///
/// When `path` is an existing directory the diagram goes to `schema.<extension>` inside it.
pub fn write_diagram(path: &Path, format: DiagramFormat) -> Result<PathBuf, Error> {
    let path = if path.is_dir() {
        path.join(format!("schema.{}", format.extension()))
    } else {
        path.to_path_buf()
    };

    let output = render(catalog(), format)?;
    std::fs::write(&path, output)?;

    tracing::info!(path = %path.display(), ?format, "Wrote schema diagram");

    Ok(path)
}
