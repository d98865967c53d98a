//! Domain layer
//!
//! Plain value types shared by the core and the presentation layer:
//! - Screens a session can show
//! - Moods a user can report

pub mod mood;
pub mod view;

pub use mood::Mood;
pub use view::View;
