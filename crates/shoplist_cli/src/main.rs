//! Terminal front end for the shoplist item manager.
//!
//! # Responsibility
//! - Resolve configuration from flags and environment.
//! - Start file logging and open the local database.
//! - Drive the list controller from an interactive shell.

mod config;
mod session;
mod shell;
mod view;

use anyhow::{Context, Result};
use clap::Parser;
use config::{Args, Config};
use log::info;
use shoplist_core::db::open_db;
use shoplist_core::{init_logging, ListController, SqliteItemStore};

fn main() -> Result<()> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let config = Config::resolve(Args::parse(), &cwd);

    let log_dir = config
        .log_dir
        .to_str()
        .context("log directory must be valid UTF-8")?;
    init_logging(&config.log_level, log_dir).context("failed to start logging")?;

    let conn = open_db(&config.db_path)
        .with_context(|| format!("failed to open {}", config.db_path.display()))?;
    let mut controller = ListController::open(SqliteItemStore::new(&conn))
        .context("failed to load stored items")?;
    info!(
        "event=cli_start module=cli status=ok db_path={}",
        config.db_path.display()
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    session::run_session(&mut controller, &mut stdin.lock(), &mut stdout.lock())
        .context("shell session failed")?;

    info!("event=cli_exit module=cli status=ok");
    Ok(())
}
