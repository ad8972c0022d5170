//! Error handling for the IPC layer.
//!
//! One error type, [`IpcError`], covers the whole crate. Connection
//! failures are not recovered here beyond the bounded startup retry; the
//! applet treats them as fatal.

use thiserror::Error;

/// Error type for window manager IPC operations.
#[derive(Debug, Error)]
pub enum IpcError {
    /// A connection to the window manager could not be established.
    /// Wraps the socket-level establish error from the `i3ipc` crate.
    #[error("could not connect to the window manager (is i3 running?)")]
    Connect(#[from] i3ipc::EstablishError),

    /// A request or command on an established connection failed.
    #[error("request to the window manager failed")]
    Request(#[from] i3ipc::MessageError),

    /// An operation was attempted after [`close`](crate::BarConnection::close).
    #[error("the window manager connection is closed")]
    Closed,
}
