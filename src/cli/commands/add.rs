use super::{audit, open_app};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::validate::WorkoutInput;
use crate::errors::{AppError, AppResult};
use crate::models::{Coords, WorkoutKind};
use crate::ui::messages::success;
use crate::ui::render;

/// Log a new workout: a map click at `--at`, then a form submission.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        kind,
        distance,
        duration,
        cadence,
        elevation,
        at,
    } = cmd
    {
        //
        // 1. Parse kind (mandatory)
        //
        let kind = WorkoutKind::from_code(kind).ok_or_else(|| {
            AppError::InvalidKind(format!(
                "Invalid workout type '{}'. Use 'running' or 'cycling'.",
                kind
            ))
        })?;

        //
        // 2. Parse target position (optional)
        //
        let target = at.as_deref().map(Coords::parse).transpose()?;

        //
        // 3. Form values: a missing field is NaN so validation rejects it
        //
        let extra = match kind {
            WorkoutKind::Running => *cadence,
            WorkoutKind::Cycling => *elevation,
        };
        let input = WorkoutInput {
            kind,
            distance: distance.unwrap_or(f64::NAN),
            duration: duration.unwrap_or(f64::NAN),
            extra: extra.unwrap_or(f64::NAN),
        };

        //
        // 4. Load, click, submit
        //
        let mut app = open_app(cfg)?;
        let click = match (target, app.state().map_center()) {
            (Some(c), _) => c,
            (None, Some(center)) => center,
            (None, None) => {
                return Err(AppError::MapUnavailable(
                    "no position available (use --here LAT,LNG or set `home` in the config)"
                        .into(),
                ));
            }
        };

        app.show_form(click)?;
        app.toggle_kind(kind);
        let workout = app.submit_workout(input)?.clone();

        success(format!("Logged workout {}", workout.id));
        println!("{}", render::list_entry_colored(&workout));

        audit(&app, "add", &workout.id, &workout.description);
    }

    Ok(())
}
