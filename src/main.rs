use anyhow::Result;
use clap::{Parser, Subcommand};
use fintrack::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for fintrack::AppCommand {
    fn from(cmd: Commands) -> fintrack::AppCommand {
        match cmd {
            Commands::Demo => fintrack::AppCommand::Demo,
            Commands::Add {
                amount,
                category,
                description,
            } => fintrack::AppCommand::Add {
                amount,
                category,
                description,
            },
            Commands::List => fintrack::AppCommand::List,
            Commands::Prices { symbols } => fintrack::AppCommand::Prices { symbols },
            Commands::Report { format } => fintrack::AppCommand::Report { format },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Run the demo sequence (default)
    Demo,
    /// Record a transaction; use a negative amount for expenses
    Add {
        #[arg(allow_hyphen_values = true)]
        amount: f64,
        category: String,
        description: String,
    },
    /// List all transactions with the current balance
    List,
    /// Show latest prices for the configured and given symbols
    Prices { symbols: Vec<String> },
    /// Print an account report
    Report {
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => fintrack::cli::setup::setup(),
        Some(cmd) => fintrack::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => fintrack::run_command(fintrack::AppCommand::Demo, cli.config_path.as_deref()).await,
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
