use super::{coords::Coords, kind::WorkoutKind};
use crate::utils::date::month_name;
use chrono::{DateTime, Datelike, Local};
use serde::{Deserialize, Serialize};

/// A single logged workout.
///
/// The common fields are shared by both kinds; the kind-specific input and
/// its derived metric live in [`WorkoutDetails`]. Persisted records keep the
/// `type` discriminator and the derived values, which are trusted as-is
/// when loaded back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: String,
    pub date: DateTime<Local>,
    pub coords: Coords,
    pub distance: f64, // km
    pub duration: f64, // min
    #[serde(default)]
    pub clicks: u32,
    pub description: String,
    #[serde(flatten)]
    pub details: WorkoutDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkoutDetails {
    Running {
        cadence: f64, // steps/min
        pace: f64,    // min/km
    },
    Cycling {
        #[serde(rename = "elevationGain")]
        elevation_gain: f64, // m
        speed: f64, // km/h
    },
}

impl Workout {
    /// Running workout created now.
    pub fn new_running(coords: Coords, distance: f64, duration: f64, cadence: f64) -> Self {
        Self::running(coords, distance, duration, cadence, Local::now())
    }

    /// Cycling workout created now.
    pub fn new_cycling(coords: Coords, distance: f64, duration: f64, elevation_gain: f64) -> Self {
        Self::cycling(coords, distance, duration, elevation_gain, Local::now())
    }

    /// Build a running workout; pace is `duration / distance`.
    /// Inputs are expected to be validated by the caller.
    pub fn running(
        coords: Coords,
        distance: f64,
        duration: f64,
        cadence: f64,
        created_at: DateTime<Local>,
    ) -> Self {
        let pace = duration / distance;
        Self::build(
            coords,
            distance,
            duration,
            created_at,
            WorkoutDetails::Running { cadence, pace },
        )
    }

    /// Build a cycling workout; speed is `distance / (duration / 60)`.
    pub fn cycling(
        coords: Coords,
        distance: f64,
        duration: f64,
        elevation_gain: f64,
        created_at: DateTime<Local>,
    ) -> Self {
        let speed = distance / (duration / 60.0);
        Self::build(
            coords,
            distance,
            duration,
            created_at,
            WorkoutDetails::Cycling {
                elevation_gain,
                speed,
            },
        )
    }

    fn build(
        coords: Coords,
        distance: f64,
        duration: f64,
        created_at: DateTime<Local>,
        details: WorkoutDetails,
    ) -> Self {
        let mut w = Self {
            id: id_from_timestamp(created_at.timestamp_millis()),
            date: created_at,
            coords,
            distance,
            duration,
            clicks: 0,
            description: String::new(),
            details,
        };
        // metric is already in `details`; description comes last
        w.description = describe(w.kind(), &w.date);
        w
    }

    pub fn kind(&self) -> WorkoutKind {
        match self.details {
            WorkoutDetails::Running { .. } => WorkoutKind::Running,
            WorkoutDetails::Cycling { .. } => WorkoutKind::Cycling,
        }
    }

    /// Derived metric and its unit: pace (min/km) or speed (km/h).
    pub fn metric(&self) -> (f64, &'static str) {
        match self.details {
            WorkoutDetails::Running { pace, .. } => (pace, "min/km"),
            WorkoutDetails::Cycling { speed, .. } => (speed, "km/h"),
        }
    }

    /// Kind-specific input: cadence (spm) or elevation gain (m).
    pub fn kind_input(&self) -> (f64, &'static str) {
        match self.details {
            WorkoutDetails::Running { cadence, .. } => (cadence, "spm"),
            WorkoutDetails::Cycling { elevation_gain, .. } => (elevation_gain, "m"),
        }
    }

    pub fn click(&mut self) {
        self.clicks += 1;
    }
}

/// Last 10 digits of a millisecond timestamp.
fn id_from_timestamp(millis: i64) -> String {
    let s = millis.to_string();
    let start = s.len().saturating_sub(10);
    s[start..].to_string()
}

/// `"<Kind> on <Month> <day>"`
fn describe(kind: WorkoutKind, date: &DateTime<Local>) -> String {
    format!(
        "{} on {} {}",
        kind.label(),
        month_name(date.month0()),
        date.day()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, 8, 30, 0).unwrap()
    }

    #[test]
    fn running_pace_is_duration_over_distance() {
        let w = Workout::running(Coords::new(51.5, -0.12), 5.0, 25.0, 178.0, at(2025, 3, 14));
        let (pace, unit) = w.metric();
        assert!((pace - 5.0).abs() < f64::EPSILON);
        assert_eq!(unit, "min/km");
        assert_eq!(w.description, "Running on March 14");
        assert_eq!(w.kind(), WorkoutKind::Running);
        assert_eq!(w.clicks, 0);
    }

    #[test]
    fn cycling_speed_accepts_negative_elevation() {
        for elevation in [-120.0, 0.0, 523.0] {
            let w = Workout::cycling(Coords::new(0.0, 0.0), 27.0, 95.0, elevation, at(2025, 12, 1));
            let (speed, unit) = w.metric();
            assert!((speed - 27.0 / (95.0 / 60.0)).abs() < 1e-9);
            assert_eq!(unit, "km/h");
            assert_eq!(w.kind_input(), (elevation, "m"));
            assert_eq!(w.description, "Cycling on December 1");
        }
    }

    #[test]
    fn zero_distance_is_not_guarded() {
        let w = Workout::running(Coords::new(0.0, 0.0), 0.0, 10.0, 150.0, at(2025, 1, 1));
        assert!(w.metric().0.is_infinite());
    }

    #[test]
    fn id_keeps_last_ten_digits() {
        assert_eq!(id_from_timestamp(1_741_950_000_123), "1950000123");
        assert_eq!(id_from_timestamp(42), "42");

        let w = Workout::running(Coords::new(1.0, 1.0), 1.0, 1.0, 1.0, at(2025, 6, 2));
        assert_eq!(w.id.len(), 10);
    }

    #[test]
    fn click_increments_counter() {
        let mut w = Workout::new_cycling(Coords::new(1.0, 2.0), 10.0, 30.0, 50.0);
        w.click();
        w.click();
        assert_eq!(w.clicks, 2);
    }

    #[test]
    fn json_keeps_type_tag_and_derived_fields() {
        let w = Workout::running(Coords::new(51.5, -0.12), 5.0, 25.0, 178.0, at(2025, 3, 14));
        let json = serde_json::to_value(&w).unwrap();
        assert_eq!(json["type"], "running");
        assert_eq!(json["pace"], 5.0);
        assert_eq!(json["coords"], serde_json::json!([51.5, -0.12]));

        let c = Workout::cycling(Coords::new(1.0, 2.0), 20.0, 60.0, -3.0, at(2025, 3, 14));
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["type"], "cycling");
        assert_eq!(json["elevationGain"], -3.0);
    }

    #[test]
    fn persisted_metric_is_trusted_on_load() {
        // pace deliberately inconsistent with distance/duration
        let raw = r#"{
            "id": "0000000001",
            "date": "2025-03-14T08:30:00+00:00",
            "coords": [10.0, 20.0],
            "distance": 5.0,
            "duration": 25.0,
            "clicks": 0,
            "description": "Running on March 14",
            "type": "running",
            "cadence": 170.0,
            "pace": 9.9
        }"#;
        let w: Workout = serde_json::from_str(raw).unwrap();
        assert_eq!(w.metric(), (9.9, "min/km"));
        assert_eq!(w.coords, Coords::new(10.0, 20.0));
    }
}
