use super::{audit, open_app, position};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { yes } = cmd {
        let mut app = open_app(cfg)?;
        let count = app.workouts().len();

        if !*yes
            && !ask_confirmation(&format!(
                "Delete ALL {} stored workouts? This action is irreversible.",
                count
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        app.reset(&position(cfg))?;
        audit(&app, "reset", "", &format!("Removed {} workouts", count));
        success(format!("Storage cleared ({} workouts removed).", count));
    }
    Ok(())
}
