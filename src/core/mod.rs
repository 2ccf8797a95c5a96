pub mod app;
pub mod config;
pub mod log;
pub mod validate;

pub use app::{App, AppSettings, AppState};
pub use validate::WorkoutInput;
