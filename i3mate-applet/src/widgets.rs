//! The GTK half of rendering.
//!
//! All methods here must run on the GTK main context; the event
//! coordinator is responsible for getting there. The workspace row is
//! torn down and rebuilt from scratch on every update: no diffing, so no
//! stale partial state is possible. The mode label is the one persistent
//! element: it is re-appended after each rebuild and mutated in place.

use gtk4::{self as gtk, prelude::*};

use i3mate_core::types::workspace::WorkspaceInfo;

use crate::render::WorkspaceButton;

/// The applet's widget tree: one horizontal row of workspace buttons plus
/// the trailing mode label.
#[derive(Clone)]
pub struct BarWidgets {
    container: gtk::Box,
    mode_label: gtk::Label,
}

impl BarWidgets {
    /// Builds the empty widget skeleton inside the host's container.
    pub fn new(host: &gtk::Box) -> Self {
        let container = gtk::Box::new(gtk::Orientation::Horizontal, 0);
        host.append(&container);

        let mode_label = gtk::Label::new(None);
        mode_label.set_use_markup(true);

        BarWidgets {
            container,
            mode_label,
        }
    }

    /// Replaces the whole workspace row with freshly built buttons.
    ///
    /// Each button binds its own [`WorkspaceInfo`] by value into the click
    /// handler, so a click delivered after a later rebuild still targets
    /// the workspace that was visible when the user clicked.
    pub fn rebuild_workspaces<F>(&self, buttons: &[WorkspaceButton], on_click: F)
    where
        F: Fn(&WorkspaceInfo) + Clone + 'static,
    {
        while let Some(child) = self.container.first_child() {
            self.container.remove(&child);
        }

        for model in buttons {
            let label = gtk::Label::new(None);
            label.set_markup(&model.markup);

            let button = gtk::Button::builder().child(&label).build();
            button.add_css_class("flat");

            let workspace = model.workspace.clone();
            let on_click = on_click.clone();
            button.connect_clicked(move |_| on_click(&workspace));

            self.container.append(&button);
        }

        // The mode label survives rebuilds; it goes back in as the last
        // element.
        self.container.append(&self.mode_label);
        self.container.set_visible(true);
    }

    /// Updates the persistent mode label in place. `None` empties the
    /// text; the label itself stays in the tree for layout.
    pub fn set_mode(&self, markup: Option<&str>) {
        match markup {
            Some(markup) => self.mode_label.set_markup(markup),
            None => self.mode_label.set_text(""),
        }
        self.mode_label.set_use_markup(true);
        self.mode_label.set_visible(true);
    }
}
