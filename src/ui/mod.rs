//! Presentation layer: collaborator traits for the map, the workout list
//! and the position provider, plus their terminal implementations.

pub mod messages;
pub mod render;
pub mod terminal;
pub mod view;

pub use terminal::{FixedPosition, TerminalList, TerminalMap};
pub use view::{Geolocation, MapView, WorkoutsView};
