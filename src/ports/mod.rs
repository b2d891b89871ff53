//! Ports (trait boundaries) between the engine and its drivers.
//!
//! Match drivers depend on these traits; concrete players and observers
//! live in [`crate::pipeline`].

pub mod observer;
pub mod player;

pub use observer::Observer;
pub use player::Player;
