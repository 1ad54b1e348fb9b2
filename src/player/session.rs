// Playback session state: which video is active and how it is presented.

use serde::{Deserialize, Serialize};

use super::PlayerError;
use crate::catalog::Video;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlayerMode {
    #[default]
    Closed,
    Mini,
    Full,
}

impl PlayerMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Mini => "mini",
            Self::Full => "full",
        }
    }
}

/// The single mutable playback entity.
///
/// Fields are private so that `active.is_none() == (mode == Closed)` holds
/// after every operation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaybackSession {
    active: Option<Video>,
    mode: PlayerMode,
    clock: f64,
    dragging: bool,
}

impl PlaybackSession {
    pub fn active(&self) -> Option<&Video> {
        self.active.as_ref()
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_ref().map(|v| v.id.as_str())
    }

    pub fn mode(&self) -> PlayerMode {
        self.mode
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub(crate) fn load(&mut self, video: Video) {
        self.active = Some(video);
        self.mode = PlayerMode::Full;
        self.clock = 0.0;
        self.dragging = false;
    }

    /// Replaces the active video, keeping the current mode. Ignored when the
    /// session is empty.
    pub(crate) fn switch(&mut self, video: Video) -> bool {
        if self.active.is_none() {
            return false;
        }
        self.active = Some(video);
        self.clock = 0.0;
        true
    }

    pub(crate) fn set_mode(&mut self, mode: PlayerMode) -> Result<(), PlayerError> {
        match mode {
            PlayerMode::Closed => {
                self.active = None;
                self.mode = PlayerMode::Closed;
                self.clock = 0.0;
                self.dragging = false;
                Ok(())
            }
            PlayerMode::Mini | PlayerMode::Full => {
                if self.active.is_none() {
                    return Err(PlayerError::InvalidTransition {
                        from: self.mode,
                        to: mode,
                    });
                }
                self.mode = mode;
                Ok(())
            }
        }
    }

    pub(crate) fn set_clock(&mut self, seconds: f64) {
        if self.active.is_none() || !seconds.is_finite() {
            return;
        }
        self.clock = seconds.max(0.0);
    }

    pub(crate) fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging && self.active.is_some();
    }

    #[cfg(test)]
    pub(crate) fn invariant_holds(&self) -> bool {
        self.active.is_none() == (self.mode == PlayerMode::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::video;

    #[test]
    fn starts_closed_and_empty() {
        let session = PlaybackSession::default();
        assert_eq!(session.mode(), PlayerMode::Closed);
        assert!(session.active().is_none());
        assert!(session.invariant_holds());
    }

    #[test]
    fn mini_without_video_is_rejected() {
        let mut session = PlaybackSession::default();
        let err = session.set_mode(PlayerMode::Mini).unwrap_err();
        assert_eq!(
            err,
            PlayerError::InvalidTransition {
                from: PlayerMode::Closed,
                to: PlayerMode::Mini
            }
        );
        assert_eq!(session, PlaybackSession::default());
    }

    #[test]
    fn switch_on_empty_session_is_ignored() {
        let mut session = PlaybackSession::default();
        assert!(!session.switch(video("v1")));
        assert!(session.invariant_holds());
    }

    #[test]
    fn clock_is_advisory_but_needs_a_video() {
        let mut session = PlaybackSession::default();
        session.set_clock(12.0);
        assert_eq!(session.clock(), 0.0);

        session.load(video("v1"));
        session.set_clock(12.5);
        assert_eq!(session.clock(), 12.5);
        session.set_clock(-3.0);
        assert_eq!(session.clock(), 0.0);
        session.set_clock(f64::NAN);
        assert_eq!(session.clock(), 0.0);
    }

    #[test]
    fn closing_clears_drag_flag() {
        let mut session = PlaybackSession::default();
        session.load(video("v1"));
        session.set_dragging(true);
        assert!(session.is_dragging());
        session.set_mode(PlayerMode::Closed).unwrap();
        assert!(!session.is_dragging());
        session.set_dragging(true);
        assert!(!session.is_dragging());
    }
}
