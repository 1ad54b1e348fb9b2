use std::sync::Arc;

use crate::catalog::Catalog;
use crate::components::VideoCard;
use crate::db::AppSettings;
use dioxus::prelude::*;

const COUNTDOWN_MIN_SECS: u32 = 1;
const COUNTDOWN_MAX_SECS: u32 = 10;

#[component]
pub fn LibraryView() -> Element {
    let catalog = use_context::<Arc<Catalog>>();
    let mut app_settings = use_context::<Signal<AppSettings>>();
    let settings = app_settings();

    // The shell persists every change to the settings signal.
    let on_autoplay_toggle = move |_| {
        app_settings.with_mut(|settings| settings.autoplay_enabled = !settings.autoplay_enabled);
    };
    let on_muted_toggle = move |_| {
        app_settings.with_mut(|settings| settings.start_muted = !settings.start_muted);
    };
    let on_countdown_change = move |evt: Event<FormData>| {
        if let Ok(secs) = evt.value().parse::<u32>() {
            let secs = secs.clamp(COUNTDOWN_MIN_SECS, COUNTDOWN_MAX_SECS);
            app_settings.with_mut(|settings| settings.autoplay_countdown_secs = secs);
        }
    };

    rsx! {
        div { class: "space-y-10",
            header { class: "page-header",
                h1 { class: "text-3xl font-bold text-white", "Library" }
                p { class: "text-zinc-400", "{catalog.video_count()} videos" }
            }

            section { class: "settings-panel space-y-6",
                h2 { class: "text-xl font-semibold text-white", "Playback" }

                ToggleRow {
                    title: "Autoplay",
                    description: "Play the next video in the category when one ends",
                    enabled: settings.autoplay_enabled,
                    ontoggle: on_autoplay_toggle,
                }

                if settings.autoplay_enabled {
                    div {
                        label { class: "block text-sm font-medium text-zinc-400 mb-2",
                            "Autoplay countdown"
                        }
                        div { class: "flex items-center gap-4",
                            input {
                                r#type: "range",
                                min: "{COUNTDOWN_MIN_SECS}",
                                max: "{COUNTDOWN_MAX_SECS}",
                                value: settings.autoplay_countdown_secs,
                                class: "flex-1 h-2 bg-zinc-700 rounded-lg appearance-none cursor-pointer accent-emerald-500",
                                oninput: on_countdown_change,
                            }
                            span { class: "text-sm text-zinc-400 w-16 text-right",
                                "{settings.autoplay_countdown_secs} seconds"
                            }
                        }
                    }
                }

                ToggleRow {
                    title: "Start muted",
                    description: "Most browsers only autoplay muted video",
                    enabled: settings.start_muted,
                    ontoggle: on_muted_toggle,
                }
            }

            section { class: "space-y-4",
                h2 { class: "text-xl font-semibold text-white", "All videos" }
                div { class: "grid grid-cols-2 md:grid-cols-4 gap-4",
                    for video in catalog.all_videos() {
                        VideoCard { key: "{video.id}", video: video.clone(), show_category: true }
                    }
                }
            }
        }
    }
}

#[component]
fn ToggleRow(
    title: &'static str,
    description: &'static str,
    enabled: bool,
    ontoggle: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        div { class: "flex items-center justify-between",
            div {
                p { class: "font-medium text-white", "{title}" }
                p { class: "text-sm text-zinc-400", "{description}" }
            }
            button {
                class: if enabled { "w-12 h-6 bg-emerald-500 rounded-full relative transition-colors" } else { "w-12 h-6 bg-zinc-700 rounded-full relative transition-colors" },
                r#type: "button",
                role: "switch",
                aria_checked: "{enabled}",
                onclick: move |evt| ontoggle.call(evt),
                div { class: if enabled { "w-5 h-5 bg-white rounded-full absolute top-0.5 right-0.5 transition-all" } else { "w-5 h-5 bg-zinc-400 rounded-full absolute top-0.5 left-0.5 transition-all" } }
            }
        }
    }
}
