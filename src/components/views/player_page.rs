use crate::components::app_view::AppRoute;
use crate::components::Icon;
use crate::player::{PlayerCommands, PlayerController, PlayerMode};
use dioxus::prelude::*;

/// Route page for `/player/:video_id`.
///
/// The embed itself belongs to the shell; this page only drives the session
/// from the route and shows placeholders while the player is not full.
#[component]
pub fn PlayerView(video_id: String) -> Element {
    let mut player = use_context::<PlayerController>();

    // Reruns only when the route key changes; store reads here must not subscribe.
    use_effect(use_reactive(&video_id, move |video_id| {
        match player.resolve_route(&video_id) {
            Ok(video) => {
                if player.peek_active_id().as_deref() == Some(video.id.as_str()) {
                    if let Err(err) = player.set_mode(PlayerMode::Full) {
                        tracing::warn!(error = %err, "could not reopen player");
                    }
                } else {
                    tracing::info!(video_id = %video.id, "opening from route");
                    player.load_video(video);
                }
            }
            Err(err) => tracing::warn!(error = %err, "player route did not resolve"),
        }
    }));

    use_drop(move || player.leave_player_page());

    let Ok(video) = player.resolve_route(&video_id) else {
        return rsx! {
            div { class: "empty-state",
                Icon { name: "film".to_string(), class: "w-12 h-12 text-zinc-600".to_string() }
                h1 { class: "text-2xl font-bold text-white", "Video Not Found" }
                p { class: "text-zinc-400", "There is no video called \"{video_id}\"." }
                Link { to: AppRoute::HomeView {}, class: "btn btn-primary", "Back to home" }
            }
        };
    };

    let mode = player.mode();
    let is_active = player.with(|store| store.session().active_id() == Some(video.id.as_str()));

    match mode {
        PlayerMode::Full if is_active => rsx! {
            // The full player overlays this page.
            div { class: "player-page-spacer" }
        },
        PlayerMode::Mini if is_active => rsx! {
            div { class: "empty-state",
                p { class: "text-zinc-400", "\"{video.title}\" is playing in the mini player." }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        if let Err(err) = player.set_mode(PlayerMode::Full) {
                            tracing::warn!(error = %err, "could not reopen player");
                        }
                    },
                    "Open player"
                }
            }
        },
        _ => {
            let target = video.clone();
            rsx! {
                div { class: "empty-state",
                    h1 { class: "text-2xl font-bold text-white", "{video.title}" }
                    p { class: "text-zinc-400", "{video.category}" }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| player.load_video(target.clone()),
                        Icon { name: "play".to_string(), class: "w-4 h-4".to_string() }
                        "Play"
                    }
                }
            }
        }
    }
}
