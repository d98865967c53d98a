use serde::{Deserialize, Serialize};

use crate::domain::Mood;

/// Navigation triggers handled by ViewState
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMsg {
    /// "Initialize Session" on the landing screen
    Start,
    /// A mood button on the mood selection screen
    SelectMood(Mood),
    /// The navbar brand; valid from every screen
    NavigateHome,
}
