//! # i3mate IPC Layer (`i3mate-ipc`)
//!
//! This crate owns the applet's side of the window manager connection.
//! The wire protocol itself (socket framing, message encoding) is
//! delegated to the `i3ipc` crate; what lives here is:
//!
//! - [`BarConnection`]: the query / subscribe / command / close interface
//!   the applet consumes, kept as a trait so the UI layer can be tested
//!   against a mock.
//! - [`I3Ipc`]: the production backend. Requests and commands go through
//!   one connection owned by the UI thread; event delivery runs on a
//!   dedicated thread with its own listener socket plus its own query
//!   connection for the post-event workspace refetch, so the two sides
//!   never contend for a socket.

pub mod connection;
pub mod error;
pub mod i3;

pub use connection::{BarConfigSnapshot, BarConnection, EventSink};
pub use error::IpcError;
pub use i3::I3Ipc;
