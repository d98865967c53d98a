//! Widgets for each Mind_OS screen
//!
//! Widgets are stateless: they borrow the styles and the key hints they
//! show and draw into a buffer.

pub mod boot_screen;
pub mod councillor_connect;
pub mod landing;
pub mod mood_selector;
pub mod navbar;
pub mod status_bar;

pub use boot_screen::BootScreenWidget;
pub use councillor_connect::CouncillorConnectWidget;
pub use landing::LandingWidget;
pub use mood_selector::MoodSelectorWidget;
pub use navbar::NavbarWidget;
pub use status_bar::{KeyHint, StatusBarWidget};
