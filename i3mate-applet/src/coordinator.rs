//! Cross-context event marshaling.
//!
//! The window manager delivers events on the connection's own thread; the
//! widget tree may only be touched from the GTK main context. This module
//! is the single crossing point: each event stream gets its own
//! `glib::MainContext` channel, the delivery-side handler does nothing but
//! enqueue, and the main context drains each channel in FIFO order. Per
//! stream that preserves delivery order; across the two streams no order
//! is guaranteed, matching what the window manager itself guarantees.

use std::rc::Rc;

use gtk4::glib;
use tracing::debug;

use i3mate_core::types::mode::ModeChange;
use i3mate_core::types::workspace::WorkspaceInfo;

use crate::error::AppletError;
use i3mate_ipc::{BarConnection, EventSink};

/// Owns the connection's subscription on behalf of the applet.
pub struct EventCoordinator {
    conn: Rc<dyn BarConnection>,
}

impl EventCoordinator {
    pub fn new(conn: Rc<dyn BarConnection>) -> Self {
        EventCoordinator { conn }
    }

    /// Subscribes to the workspace and mode streams and wires them to the
    /// given UI-context callbacks.
    ///
    /// `on_workspaces` and `on_mode` run on the main context, one queued
    /// call at a time. A workspace event with an empty list is dropped on
    /// the delivery side before anything is scheduled: an empty update
    /// means "no information", not "clear the bar". Mode updates are
    /// always scheduled, the return to `"default"` included.
    ///
    /// # Errors
    ///
    /// Propagates the subscription failure; the applet treats it as fatal.
    pub fn start<W, M>(&self, on_workspaces: W, on_mode: M) -> Result<(), AppletError>
    where
        W: Fn(Vec<WorkspaceInfo>) + 'static,
        M: Fn(ModeChange) + 'static,
    {
        let (ws_tx, ws_rx) = glib::MainContext::channel(glib::Priority::DEFAULT);
        let (mode_tx, mode_rx) = glib::MainContext::channel(glib::Priority::DEFAULT);

        ws_rx.attach(None, move |list| {
            on_workspaces(list);
            glib::ControlFlow::Continue
        });
        mode_rx.attach(None, move |change| {
            on_mode(change);
            glib::ControlFlow::Continue
        });

        self.conn.subscribe(EventSink {
            on_workspaces: Box::new(move |list| {
                if list.is_empty() {
                    debug!("dropping empty workspace update");
                    return;
                }
                if ws_tx.send(list).is_err() {
                    debug!("UI context gone; workspace update dropped");
                }
            }),
            on_mode: Box::new(move |change| {
                if mode_tx.send(change).is_err() {
                    debug!("UI context gone; mode update dropped");
                }
            }),
        })?;
        Ok(())
    }

    /// Closes the connection. Already-queued UI callbacks still run with
    /// the values they captured; nothing new gets scheduled afterwards.
    /// Safe to call any number of times.
    pub fn stop(&self) {
        self.conn.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ws, MockConnection};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    // One test exercises the whole marshaling path so that only a single
    // test acquires the process-wide default main context.
    #[test]
    fn events_cross_to_the_main_context_in_per_stream_order() {
        let ctx = glib::MainContext::default();
        let _guard = ctx.acquire().unwrap();

        let mock = Rc::new(MockConnection::default());
        let coordinator = EventCoordinator::new(mock.clone() as Rc<dyn BarConnection>);

        let seen_lists: Rc<RefCell<Vec<Vec<WorkspaceInfo>>>> = Rc::new(RefCell::new(Vec::new()));
        let seen_modes: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));

        coordinator
            .start(
                {
                    let seen_lists = Rc::clone(&seen_lists);
                    move |list| seen_lists.borrow_mut().push(list)
                },
                {
                    let seen_modes = Rc::clone(&seen_modes);
                    move |change: ModeChange| seen_modes.borrow_mut().push(change.change)
                },
            )
            .unwrap();

        let sink = mock.take_sink();
        (sink.on_workspaces)(vec![ws(1, "1", true, false)]);
        // An empty update is dropped before scheduling.
        (sink.on_workspaces)(vec![]);
        (sink.on_workspaces)(vec![ws(1, "1", false, false), ws(2, "2", true, false)]);
        (sink.on_mode)(ModeChange::new("resize"));
        (sink.on_mode)(ModeChange::new("default"));

        while ctx.iteration(false) {}

        assert_eq!(
            *seen_lists.borrow(),
            vec![
                vec![ws(1, "1", true, false)],
                vec![ws(1, "1", false, false), ws(2, "2", true, false)],
            ]
        );
        // "default" is scheduled like any other mode change.
        assert_eq!(*seen_modes.borrow(), vec!["resize", "default"]);
    }

    #[test]
    fn stop_is_idempotent() {
        let mock = Rc::new(MockConnection::default());
        let coordinator = EventCoordinator::new(mock.clone() as Rc<dyn BarConnection>);
        coordinator.stop();
        coordinator.stop();
        assert_eq!(mock.close_calls.get(), 2);
    }
}
