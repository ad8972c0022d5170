//! Binding-mode change event payload.

/// Name of the window manager's neutral input mode.
///
/// A mode change to this value means "no active mode" and hides the mode
/// label.
pub const DEFAULT_MODE: &str = "default";

/// A binding-mode change notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeChange {
    /// The name of the mode the window manager switched to.
    pub change: String,
}

impl ModeChange {
    pub fn new(change: impl Into<String>) -> Self {
        ModeChange {
            change: change.into(),
        }
    }

    /// Whether this change returns to the neutral mode.
    pub fn is_default(&self) -> bool {
        self.change == DEFAULT_MODE
    }
}
