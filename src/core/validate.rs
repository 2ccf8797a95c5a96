use crate::errors::{AppError, AppResult};
use crate::models::{Coords, Workout, WorkoutKind};

pub const INVALID_INPUT_MSG: &str = "Inputs have to be positive numbers!";

/// Raw form values. Missing or unparsable fields are `NaN`.
#[derive(Debug, Clone, Copy)]
pub struct WorkoutInput {
    pub kind: WorkoutKind,
    pub distance: f64,
    pub duration: f64,
    /// Cadence for running, elevation gain for cycling.
    pub extra: f64,
}

impl WorkoutInput {
    pub fn running(distance: f64, duration: f64, cadence: f64) -> Self {
        Self {
            kind: WorkoutKind::Running,
            distance,
            duration,
            extra: cadence,
        }
    }

    pub fn cycling(distance: f64, duration: f64, elevation_gain: f64) -> Self {
        Self {
            kind: WorkoutKind::Cycling,
            distance,
            duration,
            extra: elevation_gain,
        }
    }

    /// Every number must be finite. Running also needs a positive cadence;
    /// cycling elevation may be zero or negative.
    pub fn validate(&self) -> AppResult<()> {
        let finite = all_finite(&[self.distance, self.duration, self.extra]);
        let positive = match self.kind {
            WorkoutKind::Running => all_positive(&[self.distance, self.duration, self.extra]),
            WorkoutKind::Cycling => all_positive(&[self.distance, self.duration]),
        };

        if finite && positive {
            Ok(())
        } else {
            Err(AppError::InvalidInput(INVALID_INPUT_MSG.into()))
        }
    }

    /// Validate and build the matching workout at `coords`.
    pub fn into_workout(self, coords: Coords) -> AppResult<Workout> {
        self.validate()?;
        Ok(match self.kind {
            WorkoutKind::Running => {
                Workout::new_running(coords, self.distance, self.duration, self.extra)
            }
            WorkoutKind::Cycling => {
                Workout::new_cycling(coords, self.distance, self.duration, self.extra)
            }
        })
    }
}

pub fn all_finite(inputs: &[f64]) -> bool {
    inputs.iter().all(|v| v.is_finite())
}

pub fn all_positive(inputs: &[f64]) -> bool {
    inputs.iter().all(|v| *v > 0.0)
}
