// Dioxus handle over the session store, shared through context.

use dioxus::core::Task;
use dioxus::prelude::*;

use super::autoplay::{ChainTicket, TickOutcome};
use super::gesture::{DragGesture, GestureConfig, GestureOutcome};
use super::session::{PlaybackSession, PlayerMode};
use super::store::{PlayerCommands, SessionStore};
use super::PlayerError;
use crate::catalog::Video;
use crate::db::AppSettings;

const COUNTDOWN_TICK_MS: u64 = 1000;

#[cfg(not(target_arch = "wasm32"))]
pub async fn delay_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

#[cfg(target_arch = "wasm32")]
pub async fn delay_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

/// What presentation surfaces receive: read access plus the command surface.
///
/// Every mutation goes through the store, so the countdown task is the only
/// thing scheduled from here and it is stopped whenever the chain is cleared.
#[derive(Clone, Copy, PartialEq)]
pub struct PlayerController {
    store: Signal<SessionStore>,
    gesture: Signal<DragGesture>,
    countdown_task: Signal<Option<Task>>,
}

impl PlayerController {
    pub fn new(
        store: Signal<SessionStore>,
        gesture: Signal<DragGesture>,
        countdown_task: Signal<Option<Task>>,
    ) -> Self {
        Self {
            store,
            gesture,
            countdown_task,
        }
    }

    /// Reactive read of the whole store.
    pub fn with<R>(&self, f: impl FnOnce(&SessionStore) -> R) -> R {
        self.store.with(f)
    }

    pub fn session(&self) -> PlaybackSession {
        self.store.with(|store| store.session().clone())
    }

    /// Non-subscribing read for effects that must only rerun on their own inputs.
    pub fn peek_active_id(&self) -> Option<String> {
        self.store.peek().session().active_id().map(str::to_string)
    }

    pub fn drag_offset(&self) -> f64 {
        self.gesture.with(|gesture| gesture.offset())
    }

    pub fn resolve_route(&self, key: &str) -> Result<Video, PlayerError> {
        self.store.peek().resolve_route(key)
    }

    pub fn apply_settings(&self, settings: &AppSettings) {
        let mut store = self.store;
        let mut gesture = self.gesture;
        store.with_mut(|store| store.apply_settings(settings));
        gesture.with_mut(|gesture| gesture.set_config(GestureConfig::from(settings)));
        if !settings.autoplay_enabled {
            self.stop_countdown();
        }
    }

    pub fn video_completed(&self, video_id: &str) {
        let mut store = self.store;
        let ticket = store.with_mut(|store| store.on_video_completed(video_id));
        if let Some(ticket) = ticket {
            self.spawn_countdown(ticket);
        }
    }

    pub fn advance_clock(&self, delta: f64) {
        let mut store = self.store;
        if store.peek().session().active().is_none() {
            return;
        }
        if let Some(video_id) = store.with_mut(|store| store.advance_clock(delta)) {
            tracing::debug!(%video_id, "playback clock reached the end of the video");
            self.video_completed(&video_id);
        }
    }

    pub fn cancel_autoplay(&self) {
        let mut store = self.store;
        store.with_mut(|store| store.cancel_autoplay());
        self.stop_countdown();
    }

    /// Route teardown: no countdown outlives the player page, and a full
    /// player keeps going in the mini view.
    pub fn leave_player_page(&self) {
        self.cancel_autoplay();
        self.pointer_cancel();
        let mut store = self.store;
        store.with_mut(|store| {
            if store.mode() == PlayerMode::Full {
                let _ = store.set_mode(PlayerMode::Mini);
            }
        });
    }

    pub fn pointer_down(&self, y: f64, at_ms: f64) {
        let mut store = self.store;
        let mut gesture = self.gesture;
        gesture.with_mut(|gesture| store.with_mut(|store| gesture.begin(y, at_ms, store)));
    }

    pub fn pointer_move(&self, y: f64, at_ms: f64) -> GestureOutcome {
        let mut store = self.store;
        let mut gesture = self.gesture;
        if !gesture.peek().is_active() {
            return GestureOutcome::Ignored;
        }
        gesture.with_mut(|gesture| store.with_mut(|store| gesture.update(y, at_ms, store)))
    }

    pub fn pointer_up(&self, y: f64, at_ms: f64) -> GestureOutcome {
        let mut store = self.store;
        let mut gesture = self.gesture;
        if !gesture.peek().is_active() {
            return GestureOutcome::Ignored;
        }
        gesture.with_mut(|gesture| store.with_mut(|store| gesture.release(y, at_ms, store)))
    }

    pub fn pointer_cancel(&self) {
        let mut store = self.store;
        let mut gesture = self.gesture;
        if gesture.peek().is_active() {
            gesture.with_mut(|gesture| store.with_mut(|store| gesture.cancel(store)));
        }
    }

    fn spawn_countdown(&self, ticket: ChainTicket) {
        self.stop_countdown();

        let mut store = self.store;
        let mut slot = self.countdown_task;
        let task = spawn(async move {
            loop {
                delay_ms(COUNTDOWN_TICK_MS).await;
                match store.with_mut(|store| store.autoplay_tick(ticket)) {
                    Ok(TickOutcome::Counting { .. }) => continue,
                    Ok(TickOutcome::Fire { .. }) | Err(_) => break,
                }
            }
            slot.set(None);
        });
        slot.set(Some(task));
    }

    fn stop_countdown(&self) {
        let mut slot = self.countdown_task;
        let running = slot.write().take();
        if let Some(task) = running {
            task.cancel();
        }
    }
}

impl PlayerCommands for PlayerController {
    fn mode(&self) -> PlayerMode {
        self.store.with(|store| store.mode())
    }

    fn load_video(&mut self, video: Video) {
        self.stop_countdown();
        self.store.with_mut(|store| store.load_video(video));
    }

    fn switch_video(&mut self, video: Video) {
        self.stop_countdown();
        self.store.with_mut(|store| store.switch_video(video));
    }

    fn set_mode(&mut self, mode: PlayerMode) -> Result<(), PlayerError> {
        if mode == PlayerMode::Closed {
            self.stop_countdown();
        }
        if mode != PlayerMode::Full {
            self.pointer_cancel();
        }
        self.store.with_mut(|store| store.set_mode(mode))
    }

    fn close(&mut self) {
        self.stop_countdown();
        self.pointer_cancel();
        self.store.with_mut(|store| store.close());
    }

    fn set_clock(&mut self, seconds: f64) {
        self.store.with_mut(|store| store.set_clock(seconds));
    }

    fn set_dragging(&mut self, dragging: bool) {
        self.store.with_mut(|store| store.set_dragging(dragging));
    }
}
