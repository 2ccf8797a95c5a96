use super::{audit, open_app};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let app = open_app(cfg)?;
        ExportLogic::export(app.workouts(), *format, file, *force)?;
        audit(
            &app,
            "export",
            format.as_str(),
            &format!("{} workouts to {}", app.workouts().len(), file),
        );
    }
    Ok(())
}
