//! Command-line and environment configuration.
//!
//! # Invariants
//! - Resolved paths are absolute; the logger rejects relative directories.
//! - Without `--log-dir`, logs go to `logs/` next to the database file.

use clap::Parser;
use std::path::{Path, PathBuf};

pub const DEFAULT_DB_FILE_NAME: &str = "shoplist.sqlite3";
const DEFAULT_LOG_DIR_NAME: &str = "logs";

#[derive(Parser, Debug)]
#[command(name = "shoplist", version, about = "Keep a persistent shopping list")]
pub struct Args {
    /// SQLite file holding the list.
    #[arg(long, env = "SHOPLIST_DB", default_value = DEFAULT_DB_FILE_NAME)]
    pub db: PathBuf,
    /// trace|debug|info|warn|error; defaults by build mode.
    #[arg(long, env = "SHOPLIST_LOG_LEVEL")]
    pub log_level: Option<String>,
    #[arg(long, env = "SHOPLIST_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

/// Effective settings after defaults and path resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub log_level: String,
    pub log_dir: PathBuf,
}

impl Config {
    pub fn resolve(args: Args, cwd: &Path) -> Self {
        let db_path = absolutize(args.db, cwd);
        let log_dir = match args.log_dir {
            Some(dir) => absolutize(dir, cwd),
            None => db_path
                .parent()
                .unwrap_or(cwd)
                .join(DEFAULT_LOG_DIR_NAME),
        };
        let log_level = args
            .log_level
            .unwrap_or_else(|| shoplist_core::default_log_level().to_string());

        Self {
            db_path,
            log_level,
            log_dir,
        }
    }
}

fn absolutize(path: PathBuf, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::{Args, Config, DEFAULT_DB_FILE_NAME};
    use clap::Parser;
    use std::path::Path;

    #[test]
    fn relative_paths_resolve_against_cwd() {
        let args = Args::try_parse_from([
            "shoplist",
            "--db",
            "data/list.sqlite3",
            "--log-dir",
            "var/log",
            "--log-level",
            "warn",
        ])
        .unwrap();
        let config = Config::resolve(args, Path::new("/home/user"));

        assert_eq!(config.db_path, Path::new("/home/user/data/list.sqlite3"));
        assert_eq!(config.log_dir, Path::new("/home/user/var/log"));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn log_dir_defaults_next_to_database() {
        let args = Args {
            db: DEFAULT_DB_FILE_NAME.into(),
            log_level: None,
            log_dir: None,
        };
        let config = Config::resolve(args, Path::new("/srv/shop"));

        assert_eq!(config.db_path, Path::new("/srv/shop/shoplist.sqlite3"));
        assert_eq!(config.log_dir, Path::new("/srv/shop/logs"));
        assert_eq!(config.log_level, shoplist_core::default_log_level());
    }
}
