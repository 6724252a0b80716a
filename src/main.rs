//! taskboard - A terminal Kanban board with reminders, a calendar view and
//! PDF export.
//!
//! This is the main binary that launches the TUI application.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use anyhow::{Context, bail};
use taskboard_config::{Config, persistence};
use taskboard_protocol::KanbanBoard;
use taskboard_tui::{App, terminal};

/// Environment variable enabling the log file; its value is the filter directive.
const LOG_ENV: &str = "TASKBOARD_LOG";

/// Builds the `--help` text, naming the user config file for this platform.
fn usage() -> String {
    let user_config = persistence::default_user_config_path().map_or_else(
        |_| "the user config directory".to_string(),
        |path| path.display().to_string(),
    );
    format!(
        "\
Usage: taskboard [--help | --version]

A terminal Kanban board with reminders, a calendar view and PDF export.
The board lives in memory only; export it with `x` before quitting.

Configuration is read from ./taskboard.json5, ./taskboard.json or
{user_config}. Set TASKBOARD_LOG (e.g. TASKBOARD_LOG=debug) to write a
log file to the user data directory."
    )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Some(arg) = std::env::args().nth(1) {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{}", usage());
                return Ok(());
            }
            "-V" | "--version" => {
                println!("taskboard {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            other => bail!("unexpected argument '{other}'\n\n{}", usage()),
        }
    }

    init_logging()?;

    // Config errors abort before the terminal is touched
    let config = Config::load().context("failed to load configuration")?;
    tracing::info!(?config, "starting taskboard");

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();

    let mut terminal = terminal::setup_terminal()?;

    let mut app = App::with_config(KanbanBoard::new(), config);
    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    tracing::info!("taskboard exited");
    result
}

/// Sends tracing output to `<data dir>/taskboard/taskboard.log` when
/// `TASKBOARD_LOG` is set. Nothing is ever logged to the terminal.
fn init_logging() -> anyhow::Result<()> {
    let Ok(directive) = std::env::var(LOG_ENV) else {
        return Ok(());
    };

    let dir = dirs::data_local_dir()
        .context("no data directory for the log file")?
        .join("taskboard");
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;

    let path = dir.join("taskboard.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(directive)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
