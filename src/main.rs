use anyhow::Result;
use clap::{Parser, Subcommand};
use xrate::cli::ui;
use xrate::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    /// Skip the loading animation before requests
    #[arg(long, global = true)]
    no_animation: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Show the exchange rate between two currencies
    Rate { from: String, to: String },
    /// Convert an amount from one currency to another
    Convert {
        amount: String,
        from: String,
        to: String,
    },
    /// List supported currencies
    List,
}

impl From<Commands> for xrate::AppCommand {
    fn from(cmd: Commands) -> xrate::AppCommand {
        match cmd {
            Commands::Rate { from, to } => xrate::AppCommand::Rate { from, to },
            Commands::Convert { amount, from, to } => {
                xrate::AppCommand::Convert { amount, from, to }
            }
            Commands::List => xrate::AppCommand::List,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if let Some(Commands::Setup) = cli.command {
        return xrate::cli::setup::setup();
    }

    let app_command = cli
        .command
        .map_or(xrate::AppCommand::Interactive, Into::into);
    let command = xrate::run_command(app_command, cli.config_path.as_deref(), cli.no_animation);

    let result = tokio::select! {
        result = command => result,
        _ = tokio::signal::ctrl_c() => {
            ui::print_goodbye();
            // A pending stdin read cannot be cancelled and would stall runtime shutdown.
            std::process::exit(0);
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
