//! # i3mate Core Library (`i3mate-core`)
//!
//! `i3mate-core` is the foundation layer of the i3mate panel applet. It
//! carries the data types shared by the IPC and UI layers and the logging
//! setup used by the binary:
//!
//! - **Colors**: the [`Color`] struct for hex-encoded RGB colors and
//!   [`ColorParseError`] for parse failures.
//! - **Color scheme**: [`ColorScheme`], the fixed set of bar color roles
//!   resolved once at startup, with the built-in fallback scheme.
//! - **Workspace snapshots**: [`WorkspaceInfo`] and [`ModeChange`], the
//!   immutable event payloads delivered by the window manager.
//! - **Logging**: a minimal `tracing` subscriber setup in [`logging`].

pub mod logging;
pub mod theme;
pub mod types;

pub use theme::{BindingModeColors, ColorScheme, ThemeError, WorkspaceColors};
pub use types::color::{Color, ColorParseError};
pub use types::mode::ModeChange;
pub use types::workspace::WorkspaceInfo;
