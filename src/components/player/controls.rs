use crate::catalog::Video;
use crate::components::Icon;
use crate::player::{PlayerCommands, PlayerController, PlayerMode, SwipeToggle};
use crate::utils::{format_time, progress_percent};
use dioxus::prelude::*;

#[component]
pub fn PlayerHeader(video: Video) -> Element {
    let mut player = use_context::<PlayerController>();

    rsx! {
        div { class: "player-header flex items-center justify-between gap-3 px-4 py-3",
            button {
                class: "icon-button",
                r#type: "button",
                aria_label: "Minimize player",
                onclick: move |_| {
                    if let Err(err) = player.set_mode(PlayerMode::Mini) {
                        tracing::warn!(error = %err, "minimize rejected");
                    }
                },
                Icon { name: "chevron-down".to_string(), class: "w-5 h-5".to_string() }
            }
            div { class: "min-w-0 flex-1 text-center",
                p { class: "text-xs uppercase tracking-wider text-zinc-500", "{video.category}" }
                h2 { class: "text-sm font-semibold text-white truncate", "{video.title}" }
            }
            button {
                class: "icon-button",
                r#type: "button",
                aria_label: "Close player",
                onclick: move |_| player.close(),
                Icon { name: "x".to_string(), class: "w-5 h-5".to_string() }
            }
        }
    }
}

/// Read-only elapsed/total line driven by the advisory clock. The embed owns
/// seeking, so nothing here is interactive.
#[component]
pub fn PlaybackProgress() -> Element {
    let player = use_context::<PlayerController>();

    let (elapsed, total) = player.with(|store| {
        let session = store.session();
        let total = session
            .active()
            .and_then(|video| video.duration_secs())
            .map(f64::from);
        (session.clock(), total)
    });
    let Some(total) = total else {
        let elapsed_label = format_time(elapsed);
        return rsx! {
            p { class: "text-xs text-zinc-500", "{elapsed_label}" }
        };
    };
    let shown = elapsed.min(total);
    let percent = progress_percent(shown, total);
    let elapsed_label = format_time(shown);
    let total_label = format_time(total);
    let percent_label = format!("{percent:.0}");

    rsx! {
        div { class: "playback-progress space-y-2",
            div { class: "flex items-center justify-between text-xs font-medium text-zinc-400",
                span { "{elapsed_label}" }
                span { class: "text-white", "{total_label}" }
            }
            div {
                class: "playback-progress__track",
                role: "progressbar",
                aria_valuemin: "0",
                aria_valuemax: "100",
                aria_valuenow: "{percent_label}",
                div { class: "playback-progress__fill", style: "width: {percent}%;" }
            }
        }
    }
}

/// Countdown notice while an autoplay chain is pending, otherwise a plain
/// "up next" hint for the following video in the category.
#[component]
pub fn UpNextBanner() -> Element {
    let mut player = use_context::<PlayerController>();

    let pending = player.with(|store| {
        store
            .pending_video()
            .cloned()
            .map(|video| (video, store.chain().countdown()))
    });
    let up_next = player.with(|store| store.up_next().cloned());

    if let Some((video, remaining)) = pending {
        let target = video.clone();
        return rsx! {
            div { class: "up-next up-next--counting",
                div { class: "min-w-0",
                    p { class: "text-xs text-zinc-400", "Up next in {remaining}s" }
                    p { class: "text-sm font-medium text-white truncate", "{video.title}" }
                }
                div { class: "flex gap-2",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| player.cancel_autoplay(),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| player.switch_video(target.clone()),
                        "Play now"
                    }
                }
            }
        };
    }

    match up_next {
        Some(video) => {
            let target = video.clone();
            rsx! {
                div { class: "up-next",
                    div { class: "min-w-0",
                        p { class: "text-xs text-zinc-400", "Up next" }
                        p { class: "text-sm font-medium text-white truncate", "{video.title}" }
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| player.switch_video(target.clone()),
                        Icon { name: "next".to_string(), class: "w-4 h-4".to_string() }
                        "Play next"
                    }
                }
            }
        }
        None => rsx! {},
    }
}

/// Collapsible list of the category's videos inside the full player.
/// Tapping the header toggles it; a vertical swipe over it opens or closes it.
#[component]
pub fn InPlayerVideoList() -> Element {
    let mut expanded = use_signal(|| false);
    let mut swipe = use_signal(SwipeToggle::default);
    let player = use_context::<PlayerController>();

    let related = player.with(|store| store.related().to_vec());
    let active_id = player.with(|store| store.session().active_id().map(str::to_string));
    let count = related.len();
    let chevron = if expanded() { "chevron-up" } else { "chevron-down" };

    rsx! {
        section { class: "in-player-list",
            button {
                class: "in-player-list__toggle",
                r#type: "button",
                onpointerdown: move |evt: PointerEvent| {
                    swipe.with_mut(|swipe| swipe.begin(evt.client_coordinates().y));
                },
                onpointermove: move |evt: PointerEvent| {
                    if let Some(open) = swipe.with_mut(|swipe| swipe.update(evt.client_coordinates().y)) {
                        expanded.set(open);
                    }
                },
                onpointerup: move |_| swipe.with_mut(|swipe| swipe.end()),
                onpointercancel: move |_| swipe.with_mut(|swipe| swipe.end()),
                onclick: move |_| {
                    if !swipe.with_mut(|swipe| swipe.take_fired()) {
                        expanded.toggle();
                    }
                },
                span { "In this category ({count})" }
                Icon { name: chevron.to_string(), class: "w-4 h-4".to_string() }
            }
            if expanded() {
                ul { class: "in-player-list__items",
                    for video in related {
                        VideoRow {
                            key: "{video.id}",
                            active: active_id.as_deref() == Some(video.id.as_str()),
                            video: video.clone(),
                        }
                    }
                }
            }
        }
    }
}

/// Everything else in the category, active video excluded.
#[component]
pub fn RelatedVideoList() -> Element {
    let player = use_context::<PlayerController>();

    let active_id = player.with(|store| store.session().active_id().map(str::to_string));
    let others: Vec<Video> = player.with(|store| {
        store
            .related()
            .iter()
            .filter(|video| Some(video.id.as_str()) != active_id.as_deref())
            .cloned()
            .collect()
    });

    if others.is_empty() {
        return rsx! {};
    }

    rsx! {
        section { class: "related-list",
            h3 { class: "text-sm font-semibold text-zinc-300 mb-2", "Related" }
            ul { class: "space-y-1",
                for video in others {
                    VideoRow { key: "{video.id}", active: false, video: video.clone() }
                }
            }
        }
    }
}

#[component]
fn VideoRow(video: Video, active: bool) -> Element {
    let mut player = use_context::<PlayerController>();
    let target = video.clone();
    let duration = video.duration.clone().unwrap_or_default();

    rsx! {
        li {
            button {
                class: if active { "video-row is-active" } else { "video-row" },
                r#type: "button",
                disabled: active,
                onclick: move |_| player.switch_video(target.clone()),
                img {
                    class: "video-row__thumb",
                    src: "{video.thumbnail_url}",
                    alt: "",
                    loading: "lazy",
                }
                span { class: "video-row__title", "{video.title}" }
                span { class: "video-row__duration", "{duration}" }
            }
        }
    }
}
