use crate::components::app_view::AppRoute;
use dioxus::prelude::*;

/// Catch-all route: unknown paths land on home.
#[component]
pub fn NotFoundView(segments: Vec<String>) -> Element {
    let navigator = use_navigator();

    use_effect(move || {
        tracing::debug!(path = %segments.join("/"), "unknown route, redirecting home");
        navigator.replace(AppRoute::HomeView {});
    });

    rsx! {}
}
