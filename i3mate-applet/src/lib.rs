//! # i3mate Applet (`i3mate-applet`)
//!
//! The UI layer of the i3mate panel applet. It keeps a row of workspace
//! buttons and a binding-mode label in sync with the window manager by
//! listening to its workspace and mode event streams:
//!
//! - [`resolver`] picks the color scheme once at startup, falling back to
//!   the built-in defaults when no bar configuration carries colors.
//! - [`render`] is the pure half of rendering: workspace list + scheme in,
//!   ordered button descriptions and Pango markup out.
//! - [`widgets`] applies those descriptions to the GTK tree, rebuilding it
//!   from scratch on every update.
//! - [`coordinator`] owns the subscription and marshals each event from
//!   the delivery thread onto the GTK main context.
//! - [`applet`] ties the pieces together: construction order, the host
//!   factory entry point, and idempotent teardown.

pub mod applet;
pub mod coordinator;
pub mod error;
pub mod render;
pub mod resolver;
pub mod widgets;

pub use applet::{create, I3Applet, APPLET_KIND};
pub use error::AppletError;

#[cfg(test)]
pub(crate) mod test_support;
