use serde::{Deserialize, Serialize};

pub mod boot;
pub mod system;
pub mod view;

use boot::BootMsg;
use system::SystemMsg;
use view::ViewMsg;

/// Domain messages representing application intent
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Boot sequence (delegated to BootState)
    Boot(BootMsg),

    // Screen navigation (delegated to ViewState)
    View(ViewMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::System(msg) => msg.is_frequent(),
            Msg::Boot(_) | Msg::View(_) => false,
        }
    }
}
