//! Workout controller: keeps the in-memory list, the rendered views and the
//! persisted blob in sync.

use super::validate::WorkoutInput;
use crate::db::Storage;
use crate::errors::{AppError, AppResult};
use crate::models::{Coords, Workout, WorkoutKind};
use crate::ui::render;
use crate::ui::{Geolocation, MapView, WorkoutsView};

/// Settings the controller needs from the configuration.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub storage_key: String,
    pub map_zoom: u8,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            storage_key: "workouts".to_string(),
            map_zoom: 13,
        }
    }
}

/// Mutable application state owned by the controller.
#[derive(Debug, Default)]
pub struct AppState {
    workouts: Vec<Workout>,
    map_center: Option<Coords>,
    pending_click: Option<Coords>,
}

impl AppState {
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    /// Position the map was first loaded at, if it loaded.
    pub fn map_center(&self) -> Option<Coords> {
        self.map_center
    }

    /// Target of the next submission (last map click).
    pub fn pending_click(&self) -> Option<Coords> {
        self.pending_click
    }
}

pub struct App<S: Storage, M: MapView, V: WorkoutsView> {
    state: AppState,
    settings: AppSettings,
    storage: S,
    map: M,
    view: V,
}

impl<S: Storage, M: MapView, V: WorkoutsView> App<S, M, V> {
    /// Build the controller without running the startup sequence.
    pub fn new(storage: S, map: M, view: V, settings: AppSettings) -> Self {
        Self {
            state: AppState::default(),
            settings,
            storage,
            map,
            view,
        }
    }

    /// Startup: persisted entries are listed first, then the map is loaded
    /// (which adds their markers). A missing position leaves the app
    /// running without a map.
    pub fn start<G: Geolocation>(
        storage: S,
        map: M,
        view: V,
        geo: &G,
        settings: AppSettings,
    ) -> AppResult<Self> {
        let mut app = Self::new(storage, map, view, settings);
        app.boot(geo)?;
        Ok(app)
    }

    fn boot<G: Geolocation>(&mut self, geo: &G) -> AppResult<()> {
        self.load_persisted()?;

        match geo.current_position() {
            Ok(position) => self.load_map(position),
            Err(_) => self.view.show_map_unavailable(),
        }
        Ok(())
    }

    /// Read the stored list and render each entry as a list row.
    /// Absent or malformed data counts as an empty history.
    pub fn load_persisted(&mut self) -> AppResult<()> {
        let Some(raw) = self.storage.get_item(&self.settings.storage_key)? else {
            return Ok(());
        };

        let Ok(workouts) = serde_json::from_str::<Vec<Workout>>(&raw) else {
            return Ok(());
        };

        self.state.workouts = workouts;
        for w in &self.state.workouts {
            self.view.render_entry(w);
        }
        Ok(())
    }

    /// Center the map and draw a marker for every workout already loaded.
    pub fn load_map(&mut self, position: Coords) {
        self.map.set_view(position, self.settings.map_zoom);
        self.state.map_center = Some(position);

        for w in &self.state.workouts {
            self.map.add_marker(w.coords, w.kind(), &render::popup(w));
        }
    }

    pub fn is_map_ready(&self) -> bool {
        self.state.map_center.is_some()
    }

    /// A click on the map: remember the target and open the form.
    pub fn show_form(&mut self, click: Coords) -> AppResult<()> {
        if !self.is_map_ready() {
            return Err(AppError::MapUnavailable(
                "cannot place a workout before the map is loaded".into(),
            ));
        }
        self.state.pending_click = Some(click);
        self.view.show_form();
        Ok(())
    }

    pub fn toggle_kind(&mut self, kind: WorkoutKind) {
        self.view.toggle_fields(kind);
    }

    /// Validate the form values, then append, render and persist.
    /// Nothing changes when validation fails.
    pub fn submit_workout(&mut self, input: WorkoutInput) -> AppResult<&Workout> {
        let target = self.state.pending_click.ok_or(AppError::NoTargetSelected)?;

        let workout = match input.into_workout(target) {
            Ok(w) => w,
            Err(e) => {
                if let AppError::InvalidInput(msg) = &e {
                    self.view.alert(msg);
                }
                return Err(e);
            }
        };

        self.render_marker(&workout);
        self.render_list_entry(&workout);
        self.state.workouts.push(workout);

        self.view.clear_form();
        self.view.hide_form();
        self.state.pending_click = None;

        self.persist()?;

        let idx = self.state.workouts.len() - 1;
        Ok(&self.state.workouts[idx])
    }

    pub fn render_marker(&mut self, workout: &Workout) {
        self.map
            .add_marker(workout.coords, workout.kind(), &render::popup(workout));
    }

    pub fn render_list_entry(&mut self, workout: &Workout) {
        self.view.render_entry(workout);
    }

    /// Recenter the map on the workout with `id`. Unknown ids are ignored.
    pub fn select_workout(&mut self, id: &str) -> Option<&Workout> {
        let idx = self.state.workouts.iter().position(|w| w.id == id)?;
        let coords = self.state.workouts[idx].coords;

        if self.is_map_ready() {
            self.map.set_view(coords, self.settings.map_zoom);
        }
        Some(&self.state.workouts[idx])
    }

    /// Clear storage and start over as after a page reload.
    pub fn reset<G: Geolocation>(&mut self, geo: &G) -> AppResult<()> {
        self.storage.remove_item(&self.settings.storage_key)?;

        self.state = AppState::default();
        self.view.clear();
        self.map.clear();

        self.boot(geo)
    }

    fn persist(&mut self) -> AppResult<()> {
        let json = serde_json::to_string(&self.state.workouts)?;
        self.storage.set_item(&self.settings.storage_key, &json)
    }

    pub fn workouts(&self) -> &[Workout] {
        self.state.workouts()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}
