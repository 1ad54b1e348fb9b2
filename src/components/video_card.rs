use crate::catalog::Video;
use crate::components::app_view::player_route;
use crate::components::Icon;
use dioxus::prelude::*;

#[component]
pub fn VideoCard(video: Video, #[props(default)] show_category: bool) -> Element {
    let route = player_route(&video);
    let duration = video.duration.clone();

    rsx! {
        Link {
            to: route,
            class: "group block text-left w-full overflow-hidden",
            div { class: "aspect-video rounded-xl bg-zinc-800 mb-3 overflow-hidden relative shadow-lg group-hover:shadow-xl transition-shadow",
                img {
                    class: "w-full h-full object-cover",
                    src: "{video.thumbnail_url}",
                    alt: "",
                    loading: "lazy",
                }
                if let Some(duration) = duration {
                    span { class: "absolute bottom-2 right-2 px-1.5 py-0.5 rounded bg-black/75 text-xs text-white",
                        "{duration}"
                    }
                }
                // Play overlay
                div { class: "absolute inset-0 bg-black/40 opacity-0 group-hover:opacity-100 transition-opacity flex items-center justify-center",
                    div { class: "w-12 h-12 rounded-full bg-emerald-500 flex items-center justify-center shadow-xl",
                        Icon {
                            name: "play".to_string(),
                            class: "w-5 h-5 text-white ml-0.5".to_string(),
                        }
                    }
                }
            }
            p {
                class: "font-medium text-white text-sm group-hover:text-emerald-400 transition-colors truncate",
                title: "{video.title}",
                "{video.title}"
            }
            if show_category {
                p { class: "text-xs text-zinc-400 truncate", "{video.category}" }
            }
        }
    }
}
