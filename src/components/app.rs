use std::sync::Arc;

use crate::catalog::{self, Catalog};
use crate::components::{NavBar, PlayerSurface};
use crate::components::app_view::AppRoute;
use crate::db::{initialize_database, load_settings, save_settings, AppSettings};
use crate::player::{delay_ms, DragGesture, PlayerController, SessionStore};
use dioxus::core::Task;
use dioxus::prelude::*;

const CLOCK_TICK_MS: u64 = 1000;

#[component]
pub fn AppShell() -> Element {
    let catalog: Arc<Catalog> = use_hook(catalog::builtin);
    let store = use_signal({
        let catalog = catalog.clone();
        move || SessionStore::new(catalog)
    });
    let gesture = use_signal(DragGesture::default);
    let countdown_task = use_signal(|| None::<Task>);
    let player = PlayerController::new(store, gesture, countdown_task);
    let mut app_settings = use_signal(AppSettings::default);
    let mut settings_loaded = use_signal(|| false);

    // Provide state via context
    use_context_provider(|| player);
    use_context_provider(|| app_settings);
    use_context_provider(|| catalog.clone());

    // Load saved settings on mount
    use_effect(move || {
        spawn(async move {
            if let Err(err) = initialize_database().await {
                tracing::error!(error = %err, "failed to initialize settings storage");
            }
            match load_settings().await {
                Ok(settings) => app_settings.set(settings),
                Err(err) => tracing::warn!(error = %err, "could not load settings, using defaults"),
            }
            settings_loaded.set(true);
        });
    });

    // Push settings into the player and persist them when they change
    use_effect(move || {
        let settings = app_settings();
        player.apply_settings(&settings);
        if settings_loaded() {
            spawn(async move {
                if let Err(err) = save_settings(settings).await {
                    tracing::warn!(error = %err, "failed to save settings");
                }
            });
        }
    });

    // Advisory playback clock; raises completion when a video runs out
    use_future(move || async move {
        loop {
            delay_ms(CLOCK_TICK_MS).await;
            player.advance_clock(CLOCK_TICK_MS as f64 / 1000.0);
        }
    });

    rsx! {
        div { class: "app-container min-h-screen",
            NavBar {}

            main { class: "page-shell",
                Outlet::<AppRoute> {}
            }

            // Lives outside the outlet so the embed survives navigation
            PlayerSurface {}
        }
    }
}
