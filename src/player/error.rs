use super::PlayerMode;

/// Failures the playback core reports instead of corrupting state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayerError {
    #[error("no video matches `{0}`")]
    NotFound(String),
    #[error("cannot switch from {from:?} to {to:?} without an active video")]
    InvalidTransition { from: PlayerMode, to: PlayerMode },
    #[error("countdown tick from chain {tick} arrived after chain {current} took over")]
    StaleTimer { tick: u64, current: u64 },
}
