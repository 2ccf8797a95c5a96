//! Terminal stand-ins for the map, the side panel and the position provider.
//! They record what was rendered so commands decide what to print.

use super::messages;
use super::render;
use super::view::{Geolocation, MapView, WorkoutsView};
use crate::errors::{AppError, AppResult};
use crate::models::{Coords, Workout, WorkoutKind};

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub at: Coords,
    pub kind: WorkoutKind,
    pub popup: String,
}

#[derive(Debug, Default)]
pub struct TerminalMap {
    center: Option<(Coords, u8)>,
    markers: Vec<Marker>,
    recenters: usize,
}

impl TerminalMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn center(&self) -> Option<(Coords, u8)> {
        self.center
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Number of `set_view` requests received.
    pub fn recenters(&self) -> usize {
        self.recenters
    }

    pub fn print_markers(&self) {
        if let Some((c, zoom)) = self.center {
            messages::map(format!("Map centered at {} (zoom {})", c, zoom));
        }
        for m in &self.markers {
            messages::map(format!("📍 {} @ {}", m.popup, m.at));
        }
    }
}

impl MapView for TerminalMap {
    fn set_view(&mut self, center: Coords, zoom: u8) {
        self.center = Some((center, zoom));
        self.recenters += 1;
    }

    fn add_marker(&mut self, at: Coords, kind: WorkoutKind, popup: &str) {
        self.markers.push(Marker {
            at,
            kind,
            popup: popup.to_string(),
        });
    }

    fn clear(&mut self) {
        self.center = None;
        self.markers.clear();
    }
}

#[derive(Debug)]
pub struct TerminalList {
    entries: Vec<String>,
    form_visible: bool,
    form_kind: WorkoutKind,
    alerts: Vec<String>,
    map_unavailable: bool,
    echo_alerts: bool,
}

impl Default for TerminalList {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            form_visible: false,
            form_kind: WorkoutKind::Running,
            alerts: Vec::new(),
            map_unavailable: false,
            echo_alerts: true,
        }
    }
}

impl TerminalList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep alerts in memory only (tests).
    pub fn silent() -> Self {
        Self {
            echo_alerts: false,
            ..Self::default()
        }
    }

    /// Rendered rows, newest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn is_form_visible(&self) -> bool {
        self.form_visible
    }

    pub fn form_kind(&self) -> WorkoutKind {
        self.form_kind
    }

    pub fn is_map_unavailable(&self) -> bool {
        self.map_unavailable
    }

    pub fn print(&self) {
        for e in &self.entries {
            println!("{}", e);
        }
    }
}

impl WorkoutsView for TerminalList {
    fn render_entry(&mut self, workout: &Workout) {
        self.entries.insert(0, render::list_entry_colored(workout));
    }

    fn show_form(&mut self) {
        self.form_visible = true;
    }

    fn hide_form(&mut self) {
        self.form_visible = false;
    }

    fn clear_form(&mut self) {
        self.form_kind = WorkoutKind::Running;
    }

    fn toggle_fields(&mut self, kind: WorkoutKind) {
        self.form_kind = kind;
    }

    fn alert(&mut self, message: &str) {
        if self.echo_alerts {
            messages::error(message);
        }
        self.alerts.push(message.to_string());
    }

    fn show_map_unavailable(&mut self) {
        self.map_unavailable = true;
        if self.echo_alerts {
            messages::warning("Unable to load map");
        }
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.form_visible = false;
        self.map_unavailable = false;
    }
}

/// Position taken from `--here` or the `home` config entry.
#[derive(Debug, Clone, Copy)]
pub struct FixedPosition(pub Option<Coords>);

impl Geolocation for FixedPosition {
    fn current_position(&self) -> AppResult<Coords> {
        self.0.ok_or_else(|| {
            AppError::MapUnavailable(
                "no position available (use --here LAT,LNG or set `home` in the config)".into(),
            )
        })
    }
}
