// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::{ExportFormat, notify_export_success};
use crate::models::Workout;
use crate::ui::messages::warning;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export workouts to `file` (absolute path) in the given format.
    pub fn export(
        workouts: &[Workout],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        if workouts.is_empty() {
            warning("No workouts to export.");
        }

        match format {
            ExportFormat::Csv => super::json_csv::write_csv(path, workouts)?,
            ExportFormat::Json => super::json_csv::write_json(path, workouts)?,
        }

        notify_export_success(&format.as_str().to_uppercase(), workouts.len(), path);
        Ok(())
    }
}
