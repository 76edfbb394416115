use std::path::PathBuf;

use clap::{Parser, Subcommand};
use holocron::{
    config::Config,
    diagram::{self, DiagramFormat},
    error::Error,
    schema::catalog,
    startup,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "holocron")]
#[command(version, about = "Star Wars catalog schema tool")]
struct Cli {
    /// Default log level when RUST_LOG is unset
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create every missing table, constraint and index in DATABASE_URL
    Migrate,
    /// Report whether existing tables in DATABASE_URL conflict with the catalog
    Check,
    /// Render the schema as an entity-relationship diagram
    Diagram {
        #[arg(long, value_enum, default_value = "mermaid")]
        format: DiagramFormat,
        /// Write to this file instead of stdout, or to `schema.<ext>` if it is a directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List tables in creation order
    Tables,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("holocron={}", cli.log_level)));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run(cli.command).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(command: Command) -> Result<(), Error> {
    match command {
        Command::Migrate => {
            let config = Config::from_env()?;
            let db = startup::connect_to_database(&config).await?;
            startup::materialize_schema(&db).await?;
        }
        Command::Check => {
            let config = Config::from_env()?;
            let db = startup::connect_to_database(&config).await?;
            startup::check_schema_conflicts(&db).await?;
            println!("No conflicts with existing tables");
        }
        Command::Diagram { format, output } => match output {
            Some(path) => {
                let written = diagram::write_diagram(&path, format)?;
                println!("Wrote {}", written.display());
            }
            None => println!("{}", diagram::render(catalog(), format)?),
        },
        Command::Tables => {
            for table in catalog().dependency_order()? {
                println!("{}", table.name);
            }
        }
    }

    Ok(())
}
