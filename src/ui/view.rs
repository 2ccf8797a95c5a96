use crate::errors::AppResult;
use crate::models::{Coords, Workout, WorkoutKind};

/// Map surface: centering and marker placement.
pub trait MapView {
    fn set_view(&mut self, center: Coords, zoom: u8);
    fn add_marker(&mut self, at: Coords, kind: WorkoutKind, popup: &str);
    fn clear(&mut self);
}

/// Side panel: the workout list and the entry form.
pub trait WorkoutsView {
    /// Insert a rendered entry at the top of the list.
    fn render_entry(&mut self, workout: &Workout);
    fn show_form(&mut self);
    fn hide_form(&mut self);
    fn clear_form(&mut self);
    /// Show the cadence field for running, the elevation field for cycling.
    fn toggle_fields(&mut self, kind: WorkoutKind);
    /// Blocking user-facing error.
    fn alert(&mut self, message: &str);
    fn show_map_unavailable(&mut self);
    fn clear(&mut self);
}

/// One-shot position provider.
pub trait Geolocation {
    fn current_position(&self) -> AppResult<Coords>;
}
