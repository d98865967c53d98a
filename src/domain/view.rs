use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Screen currently presented once the boot sequence is over
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum View {
    #[default]
    Landing,
    MoodSelect,
    Connect,
}
