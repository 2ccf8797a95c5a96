//! Pure text rendering of workouts for list rows, popups and tables.

use crate::models::Workout;
use crate::utils::colors::{color_for_kind, paint};
use crate::utils::date::short_stamp;
use crate::utils::formatting::{one_decimal, plain_number};
use crate::utils::table::{Column, Table};

/// Marker popup text: `"<icon> <description>"`.
pub fn popup(workout: &Workout) -> String {
    format!("{} {}", workout.kind().icon(), workout.description)
}

/// Single list row, without colors.
pub fn list_entry(workout: &Workout) -> String {
    let kind = workout.kind();
    let (metric, metric_unit) = workout.metric();
    let (input, input_unit) = workout.kind_input();
    let input_icon = if kind.is_running() { "🦶🏼" } else { "⛰" };

    format!(
        "[{}] {} | {} {} km | ⏱ {} min | ⚡️ {} {} | {} {} {}",
        workout.id,
        workout.description,
        kind.icon(),
        plain_number(workout.distance),
        plain_number(workout.duration),
        one_decimal(metric),
        metric_unit,
        input_icon,
        plain_number(input),
        input_unit,
    )
}

/// Colored list row for the terminal.
pub fn list_entry_colored(workout: &Workout) -> String {
    paint(color_for_kind(workout.kind()), &list_entry(workout))
}

/// Tabular view, newest first.
pub fn table(workouts: &[Workout]) -> String {
    let mut t = Table::new(vec![
        Column::new("ID", 10),
        Column::new("DATE", 16),
        Column::new("TYPE", 8),
        Column::new("KM", 7),
        Column::new("MIN", 7),
        Column::new("METRIC", 14),
        Column::new("EXTRA", 10),
        Column::new("AT", 22),
    ]);

    for w in workouts.iter().rev() {
        let (metric, metric_unit) = w.metric();
        let (input, input_unit) = w.kind_input();
        t.add_row(vec![
            w.id.clone(),
            short_stamp(&w.date),
            w.kind().as_str().to_string(),
            plain_number(w.distance),
            plain_number(w.duration),
            format!("{} {}", one_decimal(metric), metric_unit),
            format!("{} {}", plain_number(input), input_unit),
            w.coords.to_string(),
        ]);
    }

    t.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coords;
    use chrono::{Local, TimeZone};

    fn run() -> Workout {
        let at = Local.with_ymd_and_hms(2025, 3, 14, 7, 0, 0).unwrap();
        Workout::running(Coords::new(51.5, -0.12), 5.0, 25.0, 178.0, at)
    }

    #[test]
    fn running_entry_shows_pace_and_cadence() {
        let line = list_entry(&run());
        assert!(line.contains("Running on March 14"));
        assert!(line.contains("5 km"));
        assert!(line.contains("25 min"));
        assert!(line.contains("5.0 min/km"));
        assert!(line.contains("178 spm"));
    }

    #[test]
    fn cycling_entry_shows_speed_and_elevation() {
        let at = Local.with_ymd_and_hms(2025, 7, 4, 18, 0, 0).unwrap();
        let w = Workout::cycling(Coords::new(0.0, 0.0), 27.0, 95.0, -12.0, at);
        let line = list_entry(&w);
        assert!(line.contains("17.1 km/h"));
        assert!(line.contains("-12 m"));
        assert!(!line.contains("spm"));
    }

    #[test]
    fn popup_prefixes_icon() {
        assert_eq!(popup(&run()), "🏃‍♂️ Running on March 14");
    }

    #[test]
    fn table_lists_newest_first() {
        let first = run();
        let mut second = run();
        second.id = "9999999999".into();
        let out = table(&[first, second]);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("ID"));
        assert!(lines[1].starts_with("9999999999"));
        assert_eq!(lines.len(), 3);
    }
}
