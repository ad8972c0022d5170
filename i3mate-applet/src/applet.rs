//! Applet lifecycle and the host factory entry point.
//!
//! Construction runs in a fixed order, each step depending on the one
//! before it: wire teardown to the host container, open the connection,
//! resolve the color scheme, build the widget skeleton, render the
//! current workspace list once so the bar is never empty, then start
//! event delivery. Teardown can arrive twice, once from the container's
//! destroy signal and once from drop, and must stay quiet the second
//! time.

use std::cell::Cell;
use std::rc::Rc;

use gtk4::{self as gtk, prelude::*};
use tracing::{debug, error, info};

use i3mate_core::theme::ColorScheme;
use i3mate_core::types::mode::ModeChange;
use i3mate_core::types::workspace::WorkspaceInfo;
use i3mate_ipc::{BarConnection, I3Ipc};

use crate::coordinator::EventCoordinator;
use crate::error::AppletError;
use crate::render;
use crate::resolver;
use crate::widgets::BarWidgets;

/// The applet identity the factory answers to.
pub const APPLET_KIND: &str = "i3mate";

/// One live applet instance.
pub struct I3Applet {
    conn: Rc<dyn BarConnection>,
    teardown: TeardownGuard,
    scheme: Rc<ColorScheme>,
    widgets: BarWidgets,
}

/// One-shot guard around the coordinator teardown.
///
/// Both the container's destroy signal and [`Drop`] reach this; the first
/// caller stops event delivery and closes the connection, every later
/// caller returns without touching either.
struct TeardownGuard {
    coordinator: EventCoordinator,
    done: Cell<bool>,
}

impl TeardownGuard {
    fn new(coordinator: EventCoordinator) -> Self {
        TeardownGuard {
            coordinator,
            done: Cell::new(false),
        }
    }

    fn coordinator(&self) -> &EventCoordinator {
        &self.coordinator
    }

    /// Returns whether this call performed the teardown.
    fn run(&self) -> bool {
        if self.done.replace(true) {
            return false;
        }
        self.coordinator.stop();
        true
    }
}

/// Factory entry point for the host panel.
///
/// Returns `Ok(false)` immediately, with no side effects, when
/// `requested_kind` is not [`APPLET_KIND`]. Otherwise runs the full
/// construction sequence inside `container` and returns `Ok(true)`.
///
/// # Errors
///
/// Any failure during construction means the applet failed to
/// initialize; the error carries the cause for the host to report.
pub fn create(container: &gtk::Box, requested_kind: &str) -> Result<bool, AppletError> {
    if requested_kind != APPLET_KIND {
        debug!("ignoring applet request for kind '{requested_kind}'");
        return Ok(false);
    }

    // Teardown is wired before anything that can fail, so a host destroy
    // arriving mid-construction finds either nothing or a complete applet.
    let slot: Rc<Cell<Option<Rc<I3Applet>>>> = Rc::new(Cell::new(None));
    container.connect_destroy({
        let slot = Rc::clone(&slot);
        move |_| {
            if let Some(applet) = slot.take() {
                applet.shutdown();
            }
        }
    });

    let conn: Rc<dyn BarConnection> = Rc::new(I3Ipc::connect()?);
    let applet = I3Applet::build(container, conn)?;
    slot.set(Some(applet));
    Ok(true)
}

impl I3Applet {
    /// Runs the construction sequence after the connection is open.
    pub fn build(
        container: &gtk::Box,
        conn: Rc<dyn BarConnection>,
    ) -> Result<Rc<Self>, AppletError> {
        info!("initializing the i3mate applet");

        let scheme = Rc::new(resolver::resolve_scheme(
            conn.as_ref(),
            ColorScheme::fallback(),
        )?);
        debug!(?scheme, "resolved bar colors");

        let widgets = BarWidgets::new(container);

        let applet = Rc::new(I3Applet {
            conn: Rc::clone(&conn),
            teardown: TeardownGuard::new(EventCoordinator::new(Rc::clone(&conn))),
            scheme,
            widgets,
        });

        // One synchronous fetch so the bar is populated before the first
        // event arrives.
        let current = applet.conn.get_workspaces()?;
        applet.show_workspaces(current);

        let on_workspaces = {
            let applet = Rc::downgrade(&applet);
            move |list: Vec<WorkspaceInfo>| {
                if let Some(applet) = applet.upgrade() {
                    applet.show_workspaces(list);
                }
            }
        };
        let on_mode = {
            let applet = Rc::downgrade(&applet);
            move |change: ModeChange| {
                if let Some(applet) = applet.upgrade() {
                    applet.show_mode(&change);
                }
            }
        };
        applet.teardown.coordinator().start(on_workspaces, on_mode)?;

        Ok(applet)
    }

    fn show_workspaces(&self, list: Vec<WorkspaceInfo>) {
        debug!("rebuilding {} workspace buttons", list.len());
        let buttons = render::render_workspaces(&list, &self.scheme);
        let conn = Rc::clone(&self.conn);
        self.widgets.rebuild_workspaces(&buttons, move |workspace| {
            if workspace.focused {
                return;
            }
            if let Err(err) = conn.go_to_workspace(&workspace.name) {
                // Post-construction failures keep the bar alive; the click
                // simply has no effect.
                error!("workspace switch failed: {err}");
            }
        });
    }

    fn show_mode(&self, change: &ModeChange) {
        debug!("mode label update: '{}'", change.change);
        let markup = render::mode_markup(change, &self.scheme);
        self.widgets.set_mode(markup.as_deref());
    }

    /// Stops event delivery and closes the connection. Idempotent: the
    /// second and later calls return without touching anything.
    pub fn shutdown(&self) {
        if self.teardown.run() {
            info!("shut down the i3mate applet");
        } else {
            debug!("applet already shut down");
        }
    }
}

impl Drop for I3Applet {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockConnection;
    use pretty_assertions::assert_eq;

    #[test]
    fn teardown_closes_the_connection_exactly_once() {
        let mock = Rc::new(MockConnection::default());
        let guard = TeardownGuard::new(EventCoordinator::new(
            mock.clone() as Rc<dyn BarConnection>
        ));
        assert!(guard.run());
        assert!(!guard.run());
        assert!(!guard.run());
        assert_eq!(mock.close_calls.get(), 1);
    }

    #[test]
    fn factory_refuses_other_kinds_without_touching_the_container() {
        // Needs a display; skipped where GTK cannot initialize.
        if gtk::init().is_err() {
            return;
        }
        let container = gtk::Box::new(gtk::Orientation::Horizontal, 0);
        assert!(matches!(create(&container, "clock"), Ok(false)));
        assert!(container.first_child().is_none());
    }
}
