pub mod add;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod reset;
pub mod select;

use crate::config::Config;
use crate::core::app::{App, AppSettings};
use crate::db::SqliteStorage;
use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::ui::{FixedPosition, TerminalList, TerminalMap};

pub type CliApp = App<SqliteStorage, TerminalMap, TerminalList>;

/// One CLI invocation is one page load: open storage, list persisted
/// workouts, then load the map at the configured position.
pub fn open_app(cfg: &Config) -> AppResult<CliApp> {
    let storage = SqliteStorage::open(&cfg.database)?;
    App::start(
        storage,
        TerminalMap::new(),
        TerminalList::new(),
        &position(cfg),
        settings(cfg),
    )
}

pub fn position(cfg: &Config) -> FixedPosition {
    FixedPosition(cfg.home)
}

pub fn settings(cfg: &Config) -> AppSettings {
    AppSettings {
        storage_key: cfg.storage_key.clone(),
        map_zoom: cfg.map_zoom,
    }
}

/// Internal audit log; failures are reported but never fatal.
pub fn audit(app: &CliApp, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(&app.storage().pool().conn, operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}
