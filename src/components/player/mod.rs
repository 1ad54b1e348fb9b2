use crate::catalog::Video;
use crate::components::app_view::player_route;
use crate::components::Icon;
use crate::db::AppSettings;
use crate::player::{PlayerCommands, PlayerController, PlayerMode};
use dioxus::prelude::*;

mod controls;
mod embed;

use controls::{InPlayerVideoList, PlaybackProgress, PlayerHeader, RelatedVideoList, UpNextBanner};
use embed::VideoEmbed;

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use once_cell::sync::Lazy;
    use std::time::Instant;

    static STARTED: Lazy<Instant> = Lazy::new(Instant::now);
    STARTED.elapsed().as_secs_f64() * 1000.0
}

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Persistent player: one embed element shared by the full and mini layouts.
/// Only the container classes change with the mode, so minimizing never
/// restarts playback.
#[component]
pub fn PlayerSurface() -> Element {
    let player = use_context::<PlayerController>();
    let app_settings = use_context::<Signal<AppSettings>>();

    let session = player.session();
    let Some(video) = session.active().cloned() else {
        return rsx! {};
    };
    let mode = session.mode();
    let is_full = mode == PlayerMode::Full;
    let dragging = session.is_dragging();
    let offset = player.drag_offset();
    let muted = app_settings().start_muted;

    let stage_class = if is_full {
        "player-stage player-stage--full"
    } else {
        "player-stage player-stage--mini"
    };
    let frame_style = if is_full && offset > 0.0 {
        format!("transform: translateY({offset}px);")
    } else {
        String::new()
    };

    let on_pointer_down = move |evt: PointerEvent| {
        player.pointer_down(evt.client_coordinates().y, now_ms());
    };
    let on_pointer_move = move |evt: PointerEvent| {
        player.pointer_move(evt.client_coordinates().y, now_ms());
    };
    let on_pointer_up = move |evt: PointerEvent| {
        player.pointer_up(evt.client_coordinates().y, now_ms());
    };
    let on_pointer_cancel = move |_: PointerEvent| {
        player.pointer_cancel();
    };

    rsx! {
        div { class: "{stage_class}",
            if is_full {
                PlayerHeader { video: video.clone() }
            }

            div {
                class: if dragging { "player-frame is-dragging" } else { "player-frame" },
                style: "{frame_style}",
                onpointerdown: on_pointer_down,
                onpointermove: on_pointer_move,
                onpointerup: on_pointer_up,
                onpointerleave: on_pointer_up,
                onpointercancel: on_pointer_cancel,

                if is_full {
                    div { class: "drag-handle", aria_label: "Drag down to minimize" }
                }

                VideoEmbed { video: video.clone(), muted }

                if !is_full {
                    MiniExpandOverlay { video: video.clone() }
                }
            }

            if is_full {
                div { class: "player-body",
                    PlaybackProgress {}
                    UpNextBanner {}
                    InPlayerVideoList {}
                    RelatedVideoList {}
                }
            } else {
                MiniInfo { video: video.clone() }
            }
        }
    }
}

#[component]
fn MiniExpandOverlay(video: Video) -> Element {
    let mut player = use_context::<PlayerController>();
    let navigator = use_navigator();

    rsx! {
        button {
            class: "mini-expand",
            r#type: "button",
            aria_label: "Expand player",
            onclick: move |_| {
                if player.set_mode(PlayerMode::Full).is_ok() {
                    navigator.push(player_route(&video));
                }
            },
            Icon { name: "expand".to_string(), class: "w-8 h-8".to_string() }
        }
    }
}

#[component]
fn MiniInfo(video: Video) -> Element {
    let mut player = use_context::<PlayerController>();

    rsx! {
        div { class: "mini-info",
            div { class: "mini-info__text",
                p { class: "mini-info__title", "{video.title}" }
                p { class: "mini-info__category", "{video.category}" }
            }
            button {
                class: "icon-button",
                r#type: "button",
                aria_label: "Close player",
                onclick: move |_| player.close(),
                Icon { name: "x".to_string(), class: "w-4 h-4".to_string() }
            }
        }
    }
}
