use super::open_app;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, map};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Select { id } = cmd {
        let mut app = open_app(cfg)?;
        let ready = app.is_map_ready();

        match app.select_workout(id) {
            Some(w) if ready => map(format!("Map centered on {} @ {}", w.description, w.coords)),
            Some(w) => info(format!("{} @ {} (map not loaded)", w.description, w.coords)),
            None => info(format!("No workout with id {}", id)),
        }
    }
    Ok(())
}
