pub mod coords;
pub mod kind;
pub mod workout;

pub use coords::Coords;
pub use kind::WorkoutKind;
pub use workout::{Workout, WorkoutDetails};
