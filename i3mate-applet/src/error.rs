//! Error handling for the applet layer.

use thiserror::Error;

use i3mate_core::theme::ThemeError;
use i3mate_ipc::IpcError;

/// Error type for applet construction and rendering.
///
/// Either variant is fatal during construction: the factory reports the
/// applet as failed to initialize. After construction, failures inside
/// event callbacks are logged and the bar keeps its last consistent state
/// (see the policy note in `DESIGN.md`).
#[derive(Debug, Error)]
pub enum AppletError {
    /// The window manager could not be reached or a request failed.
    #[error("window manager IPC failed: {0}")]
    Ipc(#[from] IpcError),

    /// A bar configuration carried colors that could not form a scheme.
    #[error("color theme resolution failed: {0}")]
    Theme(#[from] ThemeError),
}
