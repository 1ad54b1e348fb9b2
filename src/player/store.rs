// Session store: the only owner of the playback session and the autoplay chain.

use std::sync::Arc;

use super::autoplay::{AutoplayChain, ChainTicket, TickOutcome, DEFAULT_COUNTDOWN_SECS};
use super::session::{PlaybackSession, PlayerMode};
use super::PlayerError;
use crate::catalog::{Catalog, Video};
use crate::db::AppSettings;

/// Narrow command surface handed to everything that drives playback.
pub trait PlayerCommands {
    fn mode(&self) -> PlayerMode;
    fn load_video(&mut self, video: Video);
    fn switch_video(&mut self, video: Video);
    fn set_mode(&mut self, mode: PlayerMode) -> Result<(), PlayerError>;
    fn close(&mut self);
    fn set_clock(&mut self, seconds: f64);
    fn set_dragging(&mut self, dragging: bool);
}

#[derive(Debug, Clone)]
pub struct SessionStore {
    catalog: Arc<Catalog>,
    session: PlaybackSession,
    chain: AutoplayChain,
    autoplay_enabled: bool,
    countdown_secs: u32,
}

impl SessionStore {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            session: PlaybackSession::default(),
            chain: AutoplayChain::default(),
            autoplay_enabled: true,
            countdown_secs: DEFAULT_COUNTDOWN_SECS,
        }
    }

    pub fn apply_settings(&mut self, settings: &AppSettings) {
        self.autoplay_enabled = settings.autoplay_enabled;
        self.countdown_secs = settings.autoplay_countdown_secs.max(1);
        if !self.autoplay_enabled {
            self.cancel_autoplay();
        }
    }

    pub fn session(&self) -> &PlaybackSession {
        &self.session
    }

    pub fn chain(&self) -> &AutoplayChain {
        &self.chain
    }

    pub fn find_video(&self, id: &str) -> Option<&Video> {
        self.catalog.find_video(id)
    }

    /// Resolves a route key (slug or id) without touching the session.
    pub fn resolve_route(&self, key: &str) -> Result<Video, PlayerError> {
        self.catalog
            .find_by_slug_or_id(key)
            .cloned()
            .ok_or_else(|| PlayerError::NotFound(key.to_string()))
    }

    /// Videos sharing the active video's category, in catalog order.
    pub fn related(&self) -> &[Video] {
        match self.session.active() {
            Some(video) => self.catalog.siblings(video),
            None => &[],
        }
    }

    pub fn up_next(&self) -> Option<&Video> {
        self.session
            .active()
            .and_then(|video| self.catalog.next_after(video))
    }

    pub fn pending_video(&self) -> Option<&Video> {
        self.chain.pending().and_then(|id| self.catalog.find_video(id))
    }

    /// Handles the completion signal for `video_id`.
    ///
    /// Returns a ticket when a new countdown started; the caller schedules one
    /// tick per second with it.
    pub fn on_video_completed(&mut self, video_id: &str) -> Option<ChainTicket> {
        if !self.autoplay_enabled {
            return None;
        }
        let active = self.session.active()?;
        if active.id != video_id {
            tracing::debug!(video_id, active = %active.id, "completion for inactive video ignored");
            return None;
        }
        if self.chain.is_active() && self.chain.source() == Some(video_id) {
            return None;
        }

        let Some(next) = self.catalog.next_after(active) else {
            tracing::debug!(video_id, "last video in category, no autoplay");
            return None;
        };
        let next_id = next.id.clone();

        if self.chain.cancel() {
            tracing::debug!("previous autoplay chain superseded");
        }
        let ticket = self.chain.start(video_id, &next_id, self.countdown_secs);
        tracing::info!(
            from = video_id,
            next = %next_id,
            countdown = self.chain.countdown(),
            "autoplay chain started"
        );
        Some(ticket)
    }

    pub fn autoplay_tick(&mut self, ticket: ChainTicket) -> Result<TickOutcome, PlayerError> {
        let outcome = self.chain.tick(ticket).inspect_err(|err| {
            tracing::debug!(error = %err, "discarded countdown tick");
        })?;

        if let TickOutcome::Fire { video_id } = &outcome {
            match self.catalog.find_video(video_id).cloned() {
                Some(video) => {
                    tracing::info!(video_id = %video.id, "autoplay advancing");
                    self.session.switch(video);
                }
                None => tracing::warn!(video_id = %video_id, "autoplay target vanished from catalog"),
            }
        }
        Ok(outcome)
    }

    /// Advances the advisory clock by `delta` seconds of wall time.
    ///
    /// Returns the active video id at the moment the clock crosses the video's
    /// duration label, which is the completion signal for embeds that report
    /// nothing back.
    pub fn advance_clock(&mut self, delta: f64) -> Option<String> {
        let active = self.session.active()?;
        let duration = active.duration_secs().map(f64::from);
        let video_id = active.id.clone();
        let before = self.session.clock();
        self.session.set_clock(before + delta);
        let after = self.session.clock();

        match duration {
            Some(duration) if before < duration && after >= duration => Some(video_id),
            _ => None,
        }
    }

    pub fn cancel_autoplay(&mut self) -> bool {
        let cancelled = self.chain.cancel();
        if cancelled {
            tracing::info!("autoplay chain cancelled");
        }
        cancelled
    }
}

impl PlayerCommands for SessionStore {
    fn mode(&self) -> PlayerMode {
        self.session.mode()
    }

    fn load_video(&mut self, video: Video) {
        tracing::info!(video_id = %video.id, "loading video");
        self.chain.cancel();
        self.session.load(video);
    }

    fn switch_video(&mut self, video: Video) {
        let video_id = video.id.clone();
        if self.session.switch(video) {
            self.chain.cancel();
            tracing::info!(%video_id, mode = self.session.mode().label(), "switched video");
        } else {
            tracing::debug!(%video_id, "switch ignored, no active session");
        }
    }

    fn set_mode(&mut self, mode: PlayerMode) -> Result<(), PlayerError> {
        let from = self.session.mode();
        self.session.set_mode(mode).inspect_err(|err| {
            tracing::warn!(error = %err, "rejected mode change");
        })?;
        if mode == PlayerMode::Closed {
            self.chain.cancel();
        }
        if from != mode {
            tracing::debug!(from = from.label(), to = mode.label(), "player mode changed");
        }
        Ok(())
    }

    fn close(&mut self) {
        self.chain.cancel();
        // Closing is always a valid transition.
        let _ = self.session.set_mode(PlayerMode::Closed);
    }

    fn set_clock(&mut self, seconds: f64) {
        self.session.set_clock(seconds);
    }

    fn set_dragging(&mut self, dragging: bool) {
        self.session.set_dragging(dragging);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::{catalog, video};

    fn store() -> SessionStore {
        SessionStore::new(Arc::new(catalog()))
    }

    fn assert_invariants(store: &SessionStore) {
        assert!(store.session().invariant_holds());
        assert!(store.chain().invariant_holds());
    }

    #[test]
    fn load_always_opens_full() {
        let mut store = store();
        store.load_video(video("v1"));
        store.set_mode(PlayerMode::Mini).unwrap();
        store.load_video(video("v2"));
        assert_eq!(store.mode(), PlayerMode::Full);
        assert_eq!(store.session().active_id(), Some("v2"));
        assert_eq!(store.session().clock(), 0.0);
        assert_invariants(&store);
    }

    #[test]
    fn switch_keeps_mode() {
        let mut store = store();
        store.load_video(video("v1"));
        store.set_mode(PlayerMode::Mini).unwrap();
        store.set_clock(30.0);
        store.switch_video(video("v3"));
        assert_eq!(store.mode(), PlayerMode::Mini);
        assert_eq!(store.session().active_id(), Some("v3"));
        assert_eq!(store.session().clock(), 0.0);

        store.set_mode(PlayerMode::Full).unwrap();
        store.switch_video(video("v2"));
        assert_eq!(store.mode(), PlayerMode::Full);
        assert_invariants(&store);
    }

    #[test]
    fn close_twice_matches_close_once() {
        let mut store = store();
        store.load_video(video("v1"));
        store.close();
        let once = store.session().clone();
        store.close();
        assert_eq!(store.session(), &once);
        assert!(store.session().active().is_none());
        assert_eq!(store.mode(), PlayerMode::Closed);
        assert_invariants(&store);
    }

    #[test]
    fn operations_on_empty_session_are_noops() {
        let mut store = store();
        store.switch_video(video("v1"));
        store.set_clock(5.0);
        store.set_dragging(true);
        assert!(store.set_mode(PlayerMode::Full).is_err());
        assert_eq!(store.session(), &PlaybackSession::default());
        assert!(store.on_video_completed("v1").is_none());
        assert_invariants(&store);
    }

    #[test]
    fn find_video_reports_absence() {
        let store = store();
        assert!(store.find_video("missing").is_none());
        assert_eq!(
            store.resolve_route("missing"),
            Err(PlayerError::NotFound("missing".to_string()))
        );
        assert_eq!(store.resolve_route("borrowing").unwrap().id, "v2");
    }

    #[test]
    fn completion_starts_chain_and_fires_after_two_ticks() {
        let mut store = store();
        store.load_video(video("v2"));
        let ticket = store.on_video_completed("v2").expect("chain starts");
        assert_eq!(store.chain().pending(), Some("v3"));
        assert_eq!(store.chain().countdown(), 2);
        assert_eq!(store.pending_video().map(|v| v.id.as_str()), Some("v3"));

        assert_eq!(
            store.autoplay_tick(ticket),
            Ok(TickOutcome::Counting { remaining: 1 })
        );
        assert_eq!(store.session().active_id(), Some("v2"));
        assert_invariants(&store);

        assert!(matches!(
            store.autoplay_tick(ticket),
            Ok(TickOutcome::Fire { .. })
        ));
        assert_eq!(store.session().active_id(), Some("v3"));
        assert_eq!(store.mode(), PlayerMode::Full);
        assert!(!store.chain().is_active());
        assert_invariants(&store);
    }

    #[test]
    fn autoplay_keeps_mini_mode() {
        let mut store = store();
        store.load_video(video("v1"));
        store.set_mode(PlayerMode::Mini).unwrap();
        let ticket = store.on_video_completed("v1").unwrap();
        store.autoplay_tick(ticket).unwrap();
        store.autoplay_tick(ticket).unwrap();
        assert_eq!(store.session().active_id(), Some("v2"));
        assert_eq!(store.mode(), PlayerMode::Mini);
    }

    #[test]
    fn last_video_starts_no_chain() {
        let mut store = store();
        store.load_video(video("v3"));
        assert!(store.on_video_completed("v3").is_none());
        assert!(!store.chain().is_active());
        assert_invariants(&store);
    }

    #[test]
    fn cancel_stops_the_switch() {
        let mut store = store();
        store.load_video(video("v1"));
        let ticket = store.on_video_completed("v1").unwrap();
        store.autoplay_tick(ticket).unwrap();
        assert!(store.cancel_autoplay());

        assert!(matches!(
            store.autoplay_tick(ticket),
            Err(PlayerError::StaleTimer { .. })
        ));
        assert!(store.autoplay_tick(ticket).is_err());
        assert_eq!(store.session().active_id(), Some("v1"));
        assert!(!store.chain().is_active());
        assert_invariants(&store);
    }

    #[test]
    fn repeated_completion_is_idempotent() {
        let mut store = store();
        store.load_video(video("v1"));
        let ticket = store.on_video_completed("v1").unwrap();
        store.autoplay_tick(ticket).unwrap();
        assert!(store.on_video_completed("v1").is_none());
        assert_eq!(store.chain().countdown(), 1);
        assert!(store.autoplay_tick(ticket).is_ok());
    }

    #[test]
    fn completion_for_other_video_is_ignored() {
        let mut store = store();
        store.load_video(video("v1"));
        assert!(store.on_video_completed("v2").is_none());
    }

    #[test]
    fn load_and_close_clear_pending_chain() {
        let mut store = store();
        store.load_video(video("v1"));
        let ticket = store.on_video_completed("v1").unwrap();
        store.load_video(video("v5"));
        assert!(!store.chain().is_active());
        assert!(store.autoplay_tick(ticket).is_err());
        assert_eq!(store.session().active_id(), Some("v5"));

        let ticket = store.on_video_completed("v5").unwrap();
        store.close();
        assert!(store.autoplay_tick(ticket).is_err());
        assert!(store.session().active().is_none());
        assert_invariants(&store);
    }

    #[test]
    fn manual_switch_discards_pending_chain() {
        let mut store = store();
        store.load_video(video("v1"));
        let ticket = store.on_video_completed("v1").unwrap();
        store.switch_video(video("v3"));
        assert!(store.autoplay_tick(ticket).is_err());
        assert_eq!(store.session().active_id(), Some("v3"));
    }

    #[test]
    fn disabled_autoplay_never_chains() {
        let mut store = store();
        let settings = AppSettings {
            autoplay_enabled: false,
            ..AppSettings::default()
        };
        store.apply_settings(&settings);
        store.load_video(video("v1"));
        assert!(store.on_video_completed("v1").is_none());
    }

    #[test]
    fn countdown_length_follows_settings() {
        let mut store = store();
        let settings = AppSettings {
            autoplay_countdown_secs: 5,
            ..AppSettings::default()
        };
        store.apply_settings(&settings);
        store.load_video(video("v1"));
        store.on_video_completed("v1").unwrap();
        assert_eq!(store.chain().countdown(), 5);
    }

    #[test]
    fn clock_crossing_duration_signals_completion_once() {
        let mut store = store();
        store.load_video(video("v1"));
        store.set_clock(248.0);
        assert_eq!(store.advance_clock(1.0), None);
        assert_eq!(store.advance_clock(1.0), Some("v1".to_string()));
        assert_eq!(store.advance_clock(1.0), None);
        assert_eq!(store.session().clock(), 251.0);
    }

    #[test]
    fn clock_without_duration_never_completes() {
        let mut store = store();
        store.load_video(video("v3"));
        for _ in 0..10 {
            assert_eq!(store.advance_clock(60.0), None);
        }
        let mut empty = SessionStore::new(Arc::new(catalog()));
        assert_eq!(empty.advance_clock(1.0), None);
    }

    #[test]
    fn related_and_up_next_follow_active_category() {
        let mut store = store();
        assert!(store.related().is_empty());
        store.load_video(video("v5"));
        let ids: Vec<_> = store.related().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["v5", "v6"]);
        assert_eq!(store.up_next().map(|v| v.id.as_str()), Some("v6"));
    }
}
