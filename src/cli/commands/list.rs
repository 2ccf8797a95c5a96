use super::open_app;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::ui::render;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { markers, table } = cmd {
        let app = open_app(cfg)?;

        if app.workouts().is_empty() {
            info("No workouts logged yet.");
            return Ok(());
        }

        header(format!("Workouts ({})", app.workouts().len()));
        if *table {
            print!("{}", render::table(app.workouts()));
        } else {
            app.view().print();
        }

        if *markers {
            println!();
            app.map().print_markers();
        }
    }
    Ok(())
}
