use std::sync::Arc;

use crate::catalog::Catalog;
use crate::components::{Icon, VideoCard};
use dioxus::prelude::*;

#[component]
pub fn CategoriesView() -> Element {
    let catalog = use_context::<Arc<Catalog>>();

    rsx! {
        div { class: "space-y-10",
            header { class: "page-header",
                h1 { class: "text-3xl font-bold text-white", "Categories" }
            }

            for category in catalog.categories().iter() {
                section { key: "{category.slug}", id: "{category.slug}", class: "space-y-4",
                    div { class: "flex items-center gap-3",
                        Icon { name: category.icon.clone(), class: "w-6 h-6 text-emerald-400".to_string() }
                        h2 { class: "text-xl font-semibold text-white", "{category.name}" }
                        span { class: "text-sm text-zinc-500", "{category.videos.len()} videos" }
                    }
                    div { class: "grid grid-cols-2 md:grid-cols-4 gap-4",
                        for video in category.videos.iter() {
                            VideoCard { key: "{video.id}", video: video.clone() }
                        }
                    }
                }
            }
        }
    }
}
