//! Defines the application routes.

use dioxus::prelude::*;

use crate::components::views::{CategoriesView, HomeView, LibraryView, NotFoundView, PlayerView};
use crate::components::AppShell;

#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum AppRoute {
    #[layout(AppShell)]
        #[route("/")]
        HomeView {},
        #[route("/categories")]
        CategoriesView {},
        #[route("/library")]
        LibraryView {},
        #[route("/player/:video_id")]
        PlayerView { video_id: String },
        #[route("/:..segments")]
        NotFoundView { segments: Vec<String> },
}

pub fn route_label(route: &AppRoute) -> &'static str {
    match route {
        AppRoute::HomeView {} => "Home",
        AppRoute::CategoriesView {} => "Categories",
        AppRoute::LibraryView {} => "Library",
        AppRoute::PlayerView { .. } => "Now Playing",
        AppRoute::NotFoundView { .. } => "Home",
    }
}

pub fn player_route(video: &crate::catalog::Video) -> AppRoute {
    AppRoute::PlayerView {
        video_id: video.slug.clone(),
    }
}
