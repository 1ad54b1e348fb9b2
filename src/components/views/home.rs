use std::sync::Arc;

use crate::catalog::Catalog;
use crate::components::app_view::AppRoute;
use crate::components::{Icon, VideoCard};
use dioxus::prelude::*;

const HOME_SECTION_PREVIEW: usize = 4;

#[component]
pub fn HomeView() -> Element {
    let catalog = use_context::<Arc<Catalog>>();

    if catalog.categories().is_empty() {
        return rsx! {
            div { class: "empty-state",
                Icon { name: "film".to_string(), class: "w-12 h-12 text-zinc-600".to_string() }
                p { class: "text-zinc-400", "No videos available." }
            }
        };
    }

    rsx! {
        div { class: "space-y-10",
            header { class: "page-header",
                h1 { class: "text-3xl font-bold text-white", "Watch" }
                p { class: "text-zinc-400", "{catalog.video_count()} videos across {catalog.categories().len()} categories" }
            }

            for category in catalog.categories().iter() {
                section { key: "{category.slug}", class: "space-y-4",
                    div { class: "flex items-center justify-between",
                        h2 { class: "text-xl font-semibold text-white", "{category.name}" }
                        Link {
                            to: AppRoute::CategoriesView {},
                            class: "text-sm text-zinc-400 hover:text-emerald-400 transition-colors",
                            "See all"
                        }
                    }
                    div { class: "grid grid-cols-2 md:grid-cols-4 gap-4",
                        for video in category.videos.iter().take(HOME_SECTION_PREVIEW) {
                            VideoCard { key: "{video.id}", video: video.clone() }
                        }
                    }
                }
            }
        }
    }
}
