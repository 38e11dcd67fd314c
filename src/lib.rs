pub mod cli;
pub mod core;
pub mod providers;

use crate::cli::prompt::Prompt;
use crate::cli::session::Session;
use crate::core::config::AppConfig;
use crate::providers::CurrencyApiProvider;
use anyhow::Result;
use tracing::debug;

pub enum AppCommand {
    Interactive,
    Rate {
        from: String,
        to: String,
    },
    Convert {
        amount: String,
        from: String,
        to: String,
    },
    List,
}

pub async fn run_command(
    command: AppCommand,
    config_path: Option<&str>,
    no_animation: bool,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    if no_animation {
        config.display.loading_animation = false;
    }
    debug!("Loaded config: {config:#?}");

    let provider = CurrencyApiProvider::new(&config.api.base_url, config.api.timeout())?;
    let mut session = Session::new(&provider, config.display.loading_duration());

    match command {
        AppCommand::Interactive => {
            let mut prompt = Prompt::stdin();
            cli::interactive::run(&mut session, &mut prompt).await
        }
        AppCommand::Rate { from, to } => cli::rate::run(&session, &from, &to).await,
        AppCommand::Convert { amount, from, to } => {
            cli::convert::run(&session, &amount, &from, &to).await
        }
        AppCommand::List => cli::list::run(&mut session).await,
    }
}
