// src/export/model.rs

use crate::models::{Workout, WorkoutDetails};
use serde::Serialize;

/// Flat row used for CSV export.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct WorkoutExport {
    pub id: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub lat: f64,
    pub lng: f64,
    pub distance: f64,
    pub duration: f64,
    pub metric: f64,
    pub metric_unit: String,
    pub cadence: Option<f64>,
    pub elevation_gain: Option<f64>,
    pub description: String,
}

impl From<&Workout> for WorkoutExport {
    fn from(w: &Workout) -> Self {
        let (metric, unit) = w.metric();
        let (cadence, elevation_gain) = match w.details {
            WorkoutDetails::Running { cadence, .. } => (Some(cadence), None),
            WorkoutDetails::Cycling { elevation_gain, .. } => (None, Some(elevation_gain)),
        };

        Self {
            id: w.id.clone(),
            date: w.date.to_rfc3339(),
            kind: w.kind().as_str().to_string(),
            lat: w.coords.lat,
            lng: w.coords.lng,
            distance: w.distance,
            duration: w.duration,
            metric,
            metric_unit: unit.to_string(),
            cadence,
            elevation_gain,
            description: w.description.clone(),
        }
    }
}
