//! Playback session core: session state, drag-to-minimize, autoplay chaining.

mod autoplay;
mod controller;
mod error;
mod gesture;
mod session;
mod store;

pub use autoplay::DEFAULT_COUNTDOWN_SECS;
pub use controller::{delay_ms, PlayerController};
pub use error::PlayerError;
pub use gesture::{DragGesture, SwipeToggle, MINIMIZE_DISTANCE, MINIMIZE_VELOCITY};
pub use session::PlayerMode;
pub use store::{PlayerCommands, SessionStore};
