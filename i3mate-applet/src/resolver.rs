//! One-shot color scheme resolution.
//!
//! Colors are resolved exactly once, during applet construction, and are
//! never re-resolved afterwards; a theme change in the window manager
//! takes effect on the next applet restart.

use tracing::debug;

use i3mate_core::theme::ColorScheme;
use i3mate_ipc::BarConnection;

use crate::error::AppletError;

/// Picks the color scheme from the window manager's bar configurations.
///
/// The id list is consumed back to front, so with several bars configured
/// the last-registered one wins. The window manager does not define a
/// registration order for this list, which makes the winner arbitrary in
/// the multi-bar case; the walk direction is kept anyway because it is
/// what the bar has always done.
///
/// The first configuration with a non-empty color map is converted into a
/// [`ColorScheme`] (completeness checked once, inside the conversion). If
/// no configuration yields colors (no bars, or only colorless ones), the
/// injected `defaults` are returned as-is.
///
/// # Errors
///
/// Fails if the window manager cannot be queried, or if a non-empty color
/// map turns out to be unusable (missing required roles, unparsable
/// values). There is no local recovery for either case.
pub fn resolve_scheme(
    conn: &dyn BarConnection,
    defaults: ColorScheme,
) -> Result<ColorScheme, AppletError> {
    let mut bar_ids = conn.get_bar_config_ids()?;

    while let Some(bar_id) = bar_ids.pop() {
        let bar = conn.get_bar_config(&bar_id)?;
        if bar.has_colors() {
            debug!("using colors from bar '{bar_id}'");
            return Ok(ColorScheme::from_bar_colors(&bar.colors)?);
        }
        debug!("bar '{bar_id}' defines no colors");
    }

    debug!("no bar configuration defines colors; using the built-in scheme");
    Ok(defaults)
}
