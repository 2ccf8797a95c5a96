use super::model::WorkoutExport;
use crate::errors::AppResult;
use crate::models::Workout;
use csv::Writer;
use std::path::Path;

/// Write one CSV row per workout, header included.
pub fn write_csv(path: &Path, workouts: &[Workout]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    for w in workouts {
        wtr.serialize(WorkoutExport::from(w))?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write workouts as pretty JSON, in the same shape they are stored.
pub fn write_json(path: &Path, workouts: &[Workout]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(workouts)?;
    std::fs::write(path, json)?;
    Ok(())
}
