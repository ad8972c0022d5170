//! Shared data types for the i3mate applet.

pub mod color;
pub mod mode;
pub mod workspace;

pub use color::{Color, ColorParseError};
pub use mode::ModeChange;
pub use workspace::WorkspaceInfo;
