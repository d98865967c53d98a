use serde::{Deserialize, Serialize};

/// Messages specific to BootState
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BootMsg {
    /// The one-shot boot timer elapsed
    Finished,
}
