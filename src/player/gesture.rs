//! Drag-to-minimize handling for the full-mode player surface.
//!
//! A downward drag that travels past [`GestureConfig::distance`] demotes the
//! player to mini while the pointer is still down. A shorter drag is judged on
//! release: fast enough or far enough still minimizes, otherwise it snaps back.
//! The controller only issues mode commands; the embed is never touched.

use super::session::PlayerMode;
use super::store::PlayerCommands;
use crate::db::AppSettings;

pub const MINIMIZE_DISTANCE: f64 = 120.0;
pub const MINIMIZE_VELOCITY: f64 = 500.0;
/// Vertical travel that opens or closes the in-player list.
pub const SWIPE_TOGGLE_DISTANCE: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    /// Downward travel, in pointer units, that commits a minimize.
    pub distance: f64,
    /// Release speed, in units per second, that commits a minimize.
    pub velocity: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            distance: MINIMIZE_DISTANCE,
            velocity: MINIMIZE_VELOCITY,
        }
    }
}

impl From<&AppSettings> for GestureConfig {
    fn from(settings: &AppSettings) -> Self {
        let defaults = Self::default();
        Self {
            distance: positive_or(settings.minimize_distance, defaults.distance),
            velocity: positive_or(settings.minimize_velocity, defaults.velocity),
        }
    }
}

fn positive_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Input arrived with no gesture in progress, or outside full mode.
    Ignored,
    Tracking,
    Minimized,
    SnappedBack,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Sample {
    y: f64,
    at_ms: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DragGesture {
    config: GestureConfig,
    start: Option<Sample>,
    last: Option<Sample>,
    offset: f64,
    velocity: f64,
}

impl DragGesture {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }

    /// Current downward displacement, never negative.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }

    pub fn begin<S: PlayerCommands>(&mut self, y: f64, at_ms: f64, session: &mut S) -> bool {
        // A gesture left over from a mode change may still hold the flag.
        self.finish(session);
        if session.mode() != PlayerMode::Full {
            return false;
        }
        let sample = Sample { y, at_ms };
        self.start = Some(sample);
        self.last = Some(sample);
        session.set_dragging(true);
        true
    }

    pub fn update<S: PlayerCommands>(&mut self, y: f64, at_ms: f64, session: &mut S) -> GestureOutcome {
        let Some(start) = self.start else {
            return GestureOutcome::Ignored;
        };
        if session.mode() != PlayerMode::Full {
            self.finish(session);
            return GestureOutcome::Ignored;
        }

        self.track(Sample { y, at_ms });
        let travelled = y - start.y;
        self.offset = travelled.max(0.0);

        if travelled > self.config.distance {
            tracing::debug!(travelled, "drag crossed minimize threshold");
            self.minimize(session);
            return GestureOutcome::Minimized;
        }
        GestureOutcome::Tracking
    }

    /// Pointer up or pointer leave.
    pub fn release<S: PlayerCommands>(&mut self, y: f64, at_ms: f64, session: &mut S) -> GestureOutcome {
        let Some(start) = self.start else {
            return GestureOutcome::Ignored;
        };
        if session.mode() != PlayerMode::Full {
            self.finish(session);
            return GestureOutcome::Ignored;
        }

        self.track(Sample { y, at_ms });
        let travelled = y - start.y;

        if self.velocity > self.config.velocity || travelled > self.config.distance {
            tracing::debug!(travelled, velocity = self.velocity, "drag released past threshold");
            self.minimize(session);
            GestureOutcome::Minimized
        } else {
            self.finish(session);
            GestureOutcome::SnappedBack
        }
    }

    /// Pointer cancel: drop the gesture without judging it.
    pub fn cancel<S: PlayerCommands>(&mut self, session: &mut S) {
        if self.start.is_some() {
            self.finish(session);
        }
    }

    fn track(&mut self, sample: Sample) {
        if let Some(last) = self.last {
            let dt = sample.at_ms - last.at_ms;
            if dt > 0.0 {
                self.velocity = (sample.y - last.y) / dt * 1000.0;
            }
        }
        self.last = Some(sample);
    }

    fn minimize<S: PlayerCommands>(&mut self, session: &mut S) {
        self.finish(session);
        if let Err(err) = session.set_mode(PlayerMode::Mini) {
            tracing::warn!(error = %err, "minimize gesture rejected");
        }
    }

    fn finish<S: PlayerCommands>(&mut self, session: &mut S) {
        self.reset();
        session.set_dragging(false);
    }

    fn reset(&mut self) {
        self.start = None;
        self.last = None;
        self.offset = 0.0;
        self.velocity = 0.0;
    }
}

/// Vertical swipe over the in-player list header: up opens, down closes.
///
/// Fires at most once per touch; the click that follows a swipe is swallowed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SwipeToggle {
    start: Option<f64>,
    fired: bool,
}

impl SwipeToggle {
    pub fn begin(&mut self, y: f64) {
        self.start = Some(y);
        self.fired = false;
    }

    /// `Some(true)` to open, `Some(false)` to close.
    pub fn update(&mut self, y: f64) -> Option<bool> {
        let start = self.start?;
        let delta = y - start;
        let open = if delta < -SWIPE_TOGGLE_DISTANCE {
            true
        } else if delta > SWIPE_TOGGLE_DISTANCE {
            false
        } else {
            return None;
        };
        self.start = None;
        self.fired = true;
        Some(open)
    }

    pub fn end(&mut self) {
        self.start = None;
    }

    /// True once after a swipe fired, so the trailing click can be ignored.
    pub fn take_fired(&mut self) -> bool {
        std::mem::take(&mut self.fired)
    }
}
