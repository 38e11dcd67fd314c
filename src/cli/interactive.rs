//! Menu-driven session

use super::prompt::Prompt;
use super::session::Session;
use super::{convert, list, rate, ui};
use anyhow::Result;
use tokio::io::AsyncBufRead;
use tracing::{debug, warn};

/// Outcome of one menu operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    Done,
    InputClosed,
}

/// Runs the menu until the user exits or input ends.
pub async fn run<R: AsyncBufRead + Unpin>(
    session: &mut Session<'_>,
    prompt: &mut Prompt<R>,
) -> Result<()> {
    ui::print_welcome();

    match session.load_currencies().await {
        Ok(count) => debug!(count, "Loaded supported currencies"),
        Err(e) => {
            warn!(error = %e, "Falling back to format-only currency checks");
            ui::print_error(&e.to_string());
            println!(
                "{}",
                ui::style_text(
                    "Currency codes will only be checked for format.",
                    ui::StyleType::Warning
                )
            );
        }
    }

    loop {
        ui::print_menu();
        let Some(choice) = prompt.ask("\nSelect an option (1-4): ").await? else {
            break;
        };

        let step = match choice.as_str() {
            "1" => rate::interactive(session, prompt).await?,
            "2" => convert::interactive(session, prompt).await?,
            "3" => list::interactive(session).await?,
            "4" => break,
            _ => {
                ui::print_error("Invalid choice. Please enter a number from 1 to 4.");
                continue;
            }
        };
        if step == Step::InputClosed {
            break;
        }

        match prompt
            .confirm("\nWould you like to perform another operation? (y/n): ")
            .await?
        {
            Some(true) => continue,
            _ => break,
        }
    }

    ui::print_goodbye();
    Ok(())
}
