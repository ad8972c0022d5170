//! Pure rendering: workspace list + scheme in, styled descriptions out.
//!
//! Nothing here touches a widget. The functions in this module decide
//! ordering, color selection, and markup; [`crate::widgets`] applies the
//! result to the GTK tree. Keeping this half pure is what makes the
//! rendering policy testable without a display.

use gtk4::glib::markup_escape_text;

use i3mate_core::theme::ColorScheme;
use i3mate_core::types::color::Color;
use i3mate_core::types::mode::ModeChange;
use i3mate_core::types::workspace::WorkspaceInfo;

/// The description of one workspace button, carrying the workspace it was
/// rendered from by value so a click keeps targeting what was visible at
/// render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceButton {
    pub workspace: WorkspaceInfo,
    pub bg: Color,
    pub text: Color,
    pub markup: String,
}

/// Produces the ordered button set for a workspace list.
///
/// Workspaces are sorted ascending by `num` with a stable sort, so ties
/// keep their input order. Per-workspace color priority is urgent, then
/// focused, then the active colors; the inactive roles are never selected.
/// Each workspace is judged on its own flags only; the renderer does not
/// cross-validate the list (two focused workspaces simply both get the
/// focused colors).
pub fn render_workspaces(workspaces: &[WorkspaceInfo], scheme: &ColorScheme) -> Vec<WorkspaceButton> {
    let mut sorted: Vec<WorkspaceInfo> = workspaces.to_vec();
    sorted.sort_by_key(|ws| ws.num);

    sorted
        .into_iter()
        .map(|workspace| {
            let (bg, text) = workspace_colors(&workspace, scheme);
            let markup = span_markup(bg, text, &workspace.name);
            WorkspaceButton {
                workspace,
                bg,
                text,
                markup,
            }
        })
        .collect()
}

fn workspace_colors(workspace: &WorkspaceInfo, scheme: &ColorScheme) -> (Color, Color) {
    if workspace.urgent {
        (scheme.urgent_workspace.bg, scheme.urgent_workspace.text)
    } else if workspace.focused {
        (scheme.focused_workspace.bg, scheme.focused_workspace.text)
    } else {
        (scheme.active_workspace.bg, scheme.active_workspace.text)
    }
}

/// Computes the mode label markup.
///
/// Returns `None` for the neutral `"default"` mode, meaning the label text
/// becomes empty. Otherwise the mode name is rendered bold with
/// single-space padding, using the binding-mode colors when the scheme
/// carries the complete triple. Without the triple the urgent workspace
/// colors are used instead; mode is not urgency, but that substitute is
/// what the bar has always shown and is kept as-is.
pub fn mode_markup(change: &ModeChange, scheme: &ColorScheme) -> Option<String> {
    if change.is_default() {
        return None;
    }
    let (bg, text) = match scheme.binding_mode {
        Some(binding) => (binding.bg, binding.text),
        None => (scheme.urgent_workspace.bg, scheme.urgent_workspace.text),
    };
    Some(span_markup(bg, text, &change.change))
}

fn span_markup(bg: Color, text: Color, label: &str) -> String {
    format!(
        "<span background=\"{}\" color=\"{}\"><b> {} </b></span>",
        bg.to_hex(),
        text.to_hex(),
        markup_escape_text(label)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ws;
    use pretty_assertions::assert_eq;

    fn scheme() -> ColorScheme {
        ColorScheme::fallback()
    }

    fn names(buttons: &[WorkspaceButton]) -> Vec<&str> {
        buttons.iter().map(|b| b.workspace.name.as_str()).collect()
    }

    #[test]
    fn buttons_are_ordered_by_workspace_number() {
        let buttons = render_workspaces(
            &[ws(2, "2", false, false), ws(1, "1", true, false)],
            &scheme(),
        );
        assert_eq!(names(&buttons), ["1", "2"]);
        assert_eq!(buttons[0].bg, scheme().focused_workspace.bg);
        assert_eq!(buttons[1].bg, scheme().active_workspace.bg);
    }

    #[test]
    fn ties_on_num_keep_input_order() {
        let buttons = render_workspaces(
            &[ws(-1, "mail", false, false), ws(-1, "chat", false, false)],
            &scheme(),
        );
        assert_eq!(names(&buttons), ["mail", "chat"]);
    }

    #[test]
    fn urgency_beats_focus() {
        let buttons = render_workspaces(&[ws(3, "3", true, true)], &scheme());
        assert_eq!(buttons[0].bg, scheme().urgent_workspace.bg);
        assert_eq!(buttons[0].text, scheme().urgent_workspace.text);
    }

    #[test]
    fn inactive_colors_are_never_selected() {
        let all_flag_combos = [
            ws(1, "1", false, false),
            ws(2, "2", true, false),
            ws(3, "3", false, true),
            ws(4, "4", true, true),
        ];
        for button in render_workspaces(&all_flag_combos, &scheme()) {
            assert_ne!(button.bg, scheme().inactive_workspace.bg);
        }
    }

    #[test]
    fn multiple_focused_workspaces_are_colored_independently() {
        let buttons = render_workspaces(
            &[ws(1, "1", true, false), ws(2, "2", true, false)],
            &scheme(),
        );
        for button in &buttons {
            assert_eq!(button.bg, scheme().focused_workspace.bg);
        }
    }

    #[test]
    fn markup_is_bold_and_space_padded() {
        let buttons = render_workspaces(&[ws(1, "1", true, false)], &scheme());
        assert_eq!(
            buttons[0].markup,
            "<span background=\"#285577\" color=\"#ffffff\"><b> 1 </b></span>"
        );
    }

    #[test]
    fn workspace_names_are_markup_escaped() {
        let buttons = render_workspaces(&[ws(1, "a<b", false, false)], &scheme());
        assert!(buttons[0].markup.contains("a&lt;b"));
    }

    #[test]
    fn default_mode_clears_the_label_regardless_of_scheme() {
        let with_triple = scheme();
        let mut without_triple = scheme();
        without_triple.binding_mode = None;
        assert_eq!(mode_markup(&ModeChange::new("default"), &with_triple), None);
        assert_eq!(
            mode_markup(&ModeChange::new("default"), &without_triple),
            None
        );
    }

    #[test]
    fn mode_uses_the_binding_mode_colors_when_complete() {
        use i3mate_core::theme::BindingModeColors;
        let mut distinct = scheme();
        distinct.binding_mode = Some(BindingModeColors {
            border: Color::rgb(0x10, 0x10, 0x10),
            bg: Color::rgb(0x20, 0x20, 0x20),
            text: Color::rgb(0x30, 0x30, 0x30),
        });
        let markup = mode_markup(&ModeChange::new("resize"), &distinct).unwrap();
        assert_eq!(
            markup,
            "<span background=\"#202020\" color=\"#303030\"><b> resize </b></span>"
        );
    }

    #[test]
    fn mode_falls_back_to_urgent_colors_without_the_triple() {
        let mut partial = scheme();
        partial.binding_mode = None;
        let markup = mode_markup(&ModeChange::new("resize"), &partial).unwrap();
        assert!(markup.contains(&partial.urgent_workspace.bg.to_hex()));
        assert!(markup.contains(&partial.urgent_workspace.text.to_hex()));
    }
}
