mod categories;
mod home;
mod library;
mod not_found;
mod player_page;

pub use categories::CategoriesView;
pub use home::HomeView;
pub use library::LibraryView;
pub use not_found::NotFoundView;
pub use player_page::PlayerView;
