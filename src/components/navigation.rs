use dioxus::prelude::*;

use crate::components::app_view::{route_label, AppRoute};
use crate::components::Icon;

#[component]
pub fn NavBar() -> Element {
    let route = use_route::<AppRoute>();
    let label = route_label(&route);

    rsx! {
        header { class: "nav-bar flex items-center justify-between gap-4 px-6 py-4 border-b border-zinc-800/50 backdrop-blur-xl",
            div { class: "flex items-center gap-3",
                div { class: "w-10 h-10 rounded-xl bg-gradient-to-br from-emerald-500 to-teal-600 flex items-center justify-center text-white font-bold text-lg shadow-lg shadow-emerald-500/20",
                    "R"
                }
                div {
                    p { class: "text-lg font-bold text-white", "ReelView" }
                    p { class: "text-xs text-zinc-500", "{label}" }
                }
            }

            nav { class: "flex items-center gap-1",
                NavItem {
                    icon: "home",
                    label: "Home",
                    to: AppRoute::HomeView {},
                    active: matches!(route, AppRoute::HomeView {}),
                }
                NavItem {
                    icon: "grid",
                    label: "Categories",
                    to: AppRoute::CategoriesView {},
                    active: matches!(route, AppRoute::CategoriesView {}),
                }
                NavItem {
                    icon: "library",
                    label: "Library",
                    to: AppRoute::LibraryView {},
                    active: matches!(route, AppRoute::LibraryView {}),
                }
            }
        }
    }
}

#[component]
fn NavItem(icon: String, label: String, to: AppRoute, active: bool) -> Element {
    let base_class = "flex items-center gap-2 px-3 py-2 rounded-xl text-sm font-medium transition-all duration-200";
    let active_class = if active {
        "bg-gradient-to-r from-emerald-500/20 to-teal-500/10 text-emerald-400 shadow-sm"
    } else {
        "text-zinc-400 hover:text-white hover:bg-zinc-800/50"
    };

    rsx! {
        Link { to: to, class: "{base_class} {active_class}",
            Icon { name: icon.clone(), class: "w-5 h-5".to_string() }
            span { class: "hidden sm:inline", "{label}" }
        }
    }
}
