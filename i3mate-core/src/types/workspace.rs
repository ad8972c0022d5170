//! Workspace snapshot type.

/// An immutable snapshot of one workspace, as reported by the window
/// manager.
///
/// Each workspace event carries a full list of these; a new list replaces
/// the previous one entirely. Uniqueness of `num` is assumed from the
/// window manager but not enforced here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceInfo {
    /// The workspace number. `-1` for named workspaces without a number.
    pub num: i32,
    /// The workspace name as shown on the bar and used in switch commands.
    pub name: String,
    /// Whether this workspace currently has input focus.
    pub focused: bool,
    /// Whether a window on this workspace has the urgency hint set.
    pub urgent: bool,
}

impl WorkspaceInfo {
    /// Creates a snapshot. Mostly useful in tests; production snapshots
    /// come from the IPC layer's reply conversion.
    pub fn new(num: i32, name: impl Into<String>, focused: bool, urgent: bool) -> Self {
        WorkspaceInfo {
            num,
            name: name.into(),
            focused,
            urgent,
        }
    }
}
