use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "opinions")]
#[command(about = "Share and browse short opinions about films", long_about = None)]
struct Cli {
    /// SQLite database URL; overrides OPINIONS_DATABASE_URL
    #[arg(long, global = true)]
    database_url: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web server
    Serve {
        #[arg(short, long, default_value = "5000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Apply pending schema migrations and print the schema version
    Migrate,
    /// Print the number of stored opinions
    Count,
    /// Print one opinion as JSON
    Get { id: i64 },
    /// Print a random opinion as JSON
    Random,
    /// Add an opinion through the same checks as the web form
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        text: String,
        #[arg(long)]
        source: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = config::Config::resolve(cli.database_url)?;

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(&config, &host, port).await,
        Commands::Migrate => commands::migrate::run(&config).await,
        Commands::Count => commands::opinions::run_count(&config).await,
        Commands::Get { id } => commands::opinions::run_get(&config, id).await,
        Commands::Random => commands::opinions::run_random(&config).await,
        Commands::Add { title, text, source } => {
            commands::opinions::run_add(&config, title, text, source).await
        },
    }
}
