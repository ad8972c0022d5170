//! The connection interface the applet consumes.

use std::collections::HashMap;

use i3mate_core::types::mode::ModeChange;
use i3mate_core::types::workspace::WorkspaceInfo;

use crate::error::IpcError;

/// The slice of a bar configuration the applet cares about.
///
/// `colors` is the raw key/value map the window manager reported; it
/// contains only the roles the user actually configured and may be empty.
#[derive(Debug, Clone, Default)]
pub struct BarConfigSnapshot {
    pub colors: HashMap<String, String>,
}

impl BarConfigSnapshot {
    /// Whether this configuration carries any colors at all.
    pub fn has_colors(&self) -> bool {
        !self.colors.is_empty()
    }
}

/// The pair of callbacks a subscriber registers for the two event
/// streams.
///
/// Both callbacks are invoked on the connection's event-delivery thread,
/// never on the UI thread; they must hand any render work off themselves
/// (the event coordinator forwards through a main-context channel) and
/// return promptly.
pub struct EventSink {
    /// Called with a fresh full workspace snapshot after every workspace
    /// event.
    pub on_workspaces: Box<dyn Fn(Vec<WorkspaceInfo>) + Send + 'static>,
    /// Called for every binding-mode change, the return to `"default"`
    /// included.
    pub on_mode: Box<dyn Fn(ModeChange) + Send + 'static>,
}

/// The query / subscribe / command / close surface of the window manager
/// connection.
///
/// The applet's UI thread is the only caller of every method here. The
/// contract for [`close`](BarConnection::close): it is idempotent, calling
/// it on an already-closed connection does nothing and never faults, since
/// applet teardown can run more than once.
pub trait BarConnection {
    /// Fetches the current workspace list.
    fn get_workspaces(&self) -> Result<Vec<WorkspaceInfo>, IpcError>;

    /// Fetches the identifiers of all configured bars.
    fn get_bar_config_ids(&self) -> Result<Vec<String>, IpcError>;

    /// Fetches one bar's configuration.
    fn get_bar_config(&self, id: &str) -> Result<BarConfigSnapshot, IpcError>;

    /// Tells the window manager to switch to the named workspace.
    fn go_to_workspace(&self, name: &str) -> Result<(), IpcError>;

    /// Registers the event callbacks and starts event delivery. At most
    /// one subscription per connection.
    fn subscribe(&self, sink: EventSink) -> Result<(), IpcError>;

    /// Closes the connection. Idempotent.
    fn close(&self);
}
