//! TUI widgets

pub mod nav_bar;
pub mod overlay;
pub mod page;
pub mod status_bar;
pub mod studio_menu;

pub use nav_bar::NavBar;
pub use page::SectionPage;
pub use status_bar::StatusBar;
pub use studio_menu::StudioMenu;
