//! The bar color scheme.
//!
//! The window manager exposes bar colors as a loose string-keyed map whose
//! keys depend on what the user configured. This module turns that map
//! into [`ColorScheme`], a structure carrying every color role as a named
//! field, so that lookups after resolution are plain field accesses and
//! completeness is checked exactly once.
//!
//! The scheme is resolved once at applet construction and never mutated
//! afterwards; a built-in fallback ([`ColorScheme::fallback`]) covers the
//! case where the window manager has no bar colors configured at all.

use std::collections::HashMap;

use thiserror::Error;

use crate::types::color::{Color, ColorParseError};

/// Error type for turning a bar color map into a [`ColorScheme`].
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The map was non-empty but lacked roles the renderers select.
    /// Contains the role keys that were missing.
    #[error("bar color map is missing required roles: {missing:?}")]
    IncompleteScheme { missing: Vec<String> },

    /// A role was present but its value was not a parsable hex color.
    #[error("bar color map has an unparsable value for '{role}'")]
    InvalidColor {
        role: String,
        #[source]
        source: ColorParseError,
    },
}

/// The border/background/text triple shared by the per-workspace roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkspaceColors {
    pub border: Color,
    pub bg: Color,
    pub text: Color,
}

/// Colors for the binding-mode label.
///
/// Only carried when the bar configuration defined all three
/// `binding_mode_*` keys; a partial triple counts as absent and the mode
/// label falls back to the urgent workspace colors instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindingModeColors {
    pub border: Color,
    pub bg: Color,
    pub text: Color,
}

/// The full set of bar color roles, resolved once at startup.
///
/// Exactly one instance exists for the lifetime of the applet. The
/// `inactive_workspace` role is never selected by the workspace renderer
/// (its color policy is urgent > focused > active); the field exists for
/// parity with the bar's own native rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScheme {
    pub background: Color,
    pub statusline: Color,
    pub separator: Color,
    pub binding_mode: Option<BindingModeColors>,
    pub active_workspace: WorkspaceColors,
    pub inactive_workspace: WorkspaceColors,
    pub urgent_workspace: WorkspaceColors,
    pub focused_workspace: WorkspaceColors,
}

/// Roles the renderers actually select. A color map that omits any of
/// these cannot be used and is rejected at resolution time.
const REQUIRED_ROLES: [&str; 6] = [
    "active_workspace_bg",
    "active_workspace_text",
    "focused_workspace_bg",
    "focused_workspace_text",
    "urgent_workspace_bg",
    "urgent_workspace_text",
];

const BINDING_MODE_ROLES: [&str; 3] = [
    "binding_mode_border",
    "binding_mode_bg",
    "binding_mode_text",
];

impl ColorScheme {
    /// The built-in scheme used when the window manager has no bar colors.
    ///
    /// Values mirror the stock i3bar colors.
    pub fn fallback() -> ColorScheme {
        ColorScheme {
            background: Color::rgb(0x00, 0x00, 0x00),
            statusline: Color::rgb(0xff, 0xff, 0xff),
            separator: Color::rgb(0x66, 0x66, 0x66),
            binding_mode: Some(BindingModeColors {
                border: Color::rgb(0x2f, 0x34, 0x3a),
                bg: Color::rgb(0x90, 0x00, 0x00),
                text: Color::rgb(0xff, 0xff, 0xff),
            }),
            active_workspace: WorkspaceColors {
                border: Color::rgb(0x33, 0x33, 0x33),
                bg: Color::rgb(0x5f, 0x67, 0x6a),
                text: Color::rgb(0xff, 0xff, 0xff),
            },
            inactive_workspace: WorkspaceColors {
                border: Color::rgb(0x33, 0x33, 0x33),
                bg: Color::rgb(0x22, 0x22, 0x22),
                text: Color::rgb(0x88, 0x88, 0x88),
            },
            urgent_workspace: WorkspaceColors {
                border: Color::rgb(0x2f, 0x34, 0x3a),
                bg: Color::rgb(0x90, 0x00, 0x00),
                text: Color::rgb(0xff, 0xff, 0xff),
            },
            focused_workspace: WorkspaceColors {
                border: Color::rgb(0x4c, 0x78, 0x99),
                bg: Color::rgb(0x28, 0x55, 0x77),
                text: Color::rgb(0xff, 0xff, 0xff),
            },
        }
    }

    /// Builds a scheme from a bar configuration's color map.
    ///
    /// The map is the raw key/value set the window manager reported, which
    /// contains only the keys the user configured. Rules:
    ///
    /// - The six roles the renderers select (`REQUIRED_ROLES`) must all be
    ///   present; otherwise [`ThemeError::IncompleteScheme`] is returned.
    /// - The `binding_mode_*` triple becomes [`ColorScheme::binding_mode`]
    ///   only when all three keys are present; a partial triple resolves to
    ///   `None` (the mode label then uses the urgent colors).
    /// - Any other role missing from the map keeps its built-in fallback
    ///   value; those roles are not consulted by the renderers.
    /// - Any present value that fails to parse is an error.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError`] when the map cannot yield a usable scheme.
    pub fn from_bar_colors(colors: &HashMap<String, String>) -> Result<ColorScheme, ThemeError> {
        let missing: Vec<String> = REQUIRED_ROLES
            .iter()
            .filter(|role| !colors.contains_key(**role))
            .map(|role| role.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ThemeError::IncompleteScheme { missing });
        }

        let parse = |role: &str| -> Result<Option<Color>, ThemeError> {
            match colors.get(role) {
                Some(value) => Color::from_hex(value)
                    .map(Some)
                    .map_err(|source| ThemeError::InvalidColor {
                        role: role.to_string(),
                        source,
                    }),
                None => Ok(None),
            }
        };
        // Callers gate on presence first, but absence stays an ordinary
        // error here rather than a panic path.
        let required = |role: &str| -> Result<Color, ThemeError> {
            parse(role)?.ok_or_else(|| ThemeError::IncompleteScheme {
                missing: vec![role.to_string()],
            })
        };

        let defaults = ColorScheme::fallback();

        let binding_mode = if BINDING_MODE_ROLES.iter().all(|r| colors.contains_key(*r)) {
            Some(BindingModeColors {
                border: required("binding_mode_border")?,
                bg: required("binding_mode_bg")?,
                text: required("binding_mode_text")?,
            })
        } else {
            None
        };

        Ok(ColorScheme {
            background: parse("background")?.unwrap_or(defaults.background),
            statusline: parse("statusline")?.unwrap_or(defaults.statusline),
            separator: parse("separator")?.unwrap_or(defaults.separator),
            binding_mode,
            active_workspace: WorkspaceColors {
                border: parse("active_workspace_border")?
                    .unwrap_or(defaults.active_workspace.border),
                bg: required("active_workspace_bg")?,
                text: required("active_workspace_text")?,
            },
            inactive_workspace: WorkspaceColors {
                border: parse("inactive_workspace_border")?
                    .unwrap_or(defaults.inactive_workspace.border),
                bg: parse("inactive_workspace_bg")?.unwrap_or(defaults.inactive_workspace.bg),
                text: parse("inactive_workspace_text")?
                    .unwrap_or(defaults.inactive_workspace.text),
            },
            urgent_workspace: WorkspaceColors {
                border: parse("urgent_workspace_border")?
                    .unwrap_or(defaults.urgent_workspace.border),
                bg: required("urgent_workspace_bg")?,
                text: required("urgent_workspace_text")?,
            },
            focused_workspace: WorkspaceColors {
                border: parse("focused_workspace_border")?
                    .unwrap_or(defaults.focused_workspace.border),
                bg: required("focused_workspace_bg")?,
                text: required("focused_workspace_text")?,
            },
        })
    }
}
