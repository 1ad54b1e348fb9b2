//! The components module contains all shared components for our app.

mod app;
pub mod app_view;
mod icons;
mod navigation;
mod player;
mod video_card;
pub mod views;

pub use app::*;
pub use app_view::AppRoute;
pub use icons::*;
pub use navigation::*;
pub use player::*;
pub use video_card::*;
