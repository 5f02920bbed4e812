//! Line-based conversation loop.
//!
//! Input lines:
//!
//! | Line | Event |
//! |---|---|
//! | `/start` | start command |
//! | `/task <id>` | open a task |
//! | `/press <button_id>` | button click |
//! | `/quit` | leave the loop |
//! | anything else | text message (`\n` is read as a line break) |

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::application::{DialogNavigator, NavigatorOutput, UserEvent};
use crate::domain::foundation::TaskId;

/// Errors that end the console loop.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Event(UserEvent),
    Quit,
    /// A command the console does not understand, with a usage hint.
    Invalid(String),
}

pub fn parse_line(line: &str) -> ConsoleCommand {
    let trimmed = line.trim();
    let (command, argument) = match trimmed.split_once(char::is_whitespace) {
        Some((command, argument)) => (command, argument.trim()),
        None => (trimmed, ""),
    };

    match command {
        "/start" => ConsoleCommand::Event(UserEvent::Start),
        "/quit" => ConsoleCommand::Quit,
        "/task" => match argument.parse::<TaskId>() {
            Ok(task_id) => ConsoleCommand::Event(UserEvent::OpenTask(task_id)),
            Err(_) => ConsoleCommand::Invalid("usage: /task <id>".to_string()),
        },
        "/press" if !argument.is_empty() => {
            ConsoleCommand::Event(UserEvent::Click(argument.to_string()))
        }
        "/press" => ConsoleCommand::Invalid("usage: /press <button_id>".to_string()),
        _ => ConsoleCommand::Event(UserEvent::Text(line.trim_end().replace("\\n", "\n"))),
    }
}

/// Formats notices and the screen for the terminal.
pub fn render_output(output: &NavigatorOutput) -> String {
    let mut rendered = String::new();
    for notice in &output.notices {
        rendered.push_str(&format!("* {}\n", notice));
    }
    if let Some(screen) = &output.screen {
        rendered.push_str(&screen.text);
        rendered.push('\n');
        for row in &screen.keyboard {
            let labels: Vec<String> = row
                .iter()
                .map(|button| format!("[{}] {}", button.id, button.label))
                .collect();
            rendered.push_str(&labels.join("   "));
            rendered.push('\n');
        }
    }
    rendered
}

/// Runs the conversation until `/quit` or end of input.
///
/// Dialog errors are printed and the loop goes on; only I/O errors end it.
pub async fn run_console<R, W>(
    navigator: &mut DialogNavigator,
    input: R,
    mut output: W,
) -> Result<(), ConsoleError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    tracing::info!(user_id = %navigator.user_id(), "console conversation started");

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let event = match parse_line(&line) {
            ConsoleCommand::Quit => break,
            ConsoleCommand::Invalid(hint) => {
                output.write_all(format!("{}\n", hint).as_bytes()).await?;
                continue;
            }
            ConsoleCommand::Event(event) => event,
        };

        let rendered = match navigator.handle(event).await {
            Ok(reply) => render_output(&reply),
            Err(e) => {
                tracing::warn!(user_id = %navigator.user_id(), code = %e.code(), "event failed: {}", e);
                format!("Error: {}\n", e)
            }
        };
        output.write_all(rendered.as_bytes()).await?;
        output.flush().await?;
    }

    tracing::info!(user_id = %navigator.user_id(), "console conversation ended");
    Ok(())
}
