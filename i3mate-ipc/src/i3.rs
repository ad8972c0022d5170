//! The i3 backend of [`BarConnection`].
//!
//! Socket handling mirrors how the `i3ipc` crate splits its API: an
//! [`I3Connection`] serves requests and commands, an [`I3EventListener`]
//! blocks on the event socket. The listener lives on its own thread
//! together with a second request connection used to refetch the
//! workspace list after each workspace event, so no socket is ever shared
//! across threads.

use std::cell::{Cell, RefCell};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use i3ipc::event::Event;
use i3ipc::{I3Connection, I3EventListener, Subscription};
use tracing::{debug, error, warn};

use i3mate_core::types::mode::ModeChange;
use i3mate_core::types::workspace::WorkspaceInfo;

use crate::connection::{BarConfigSnapshot, BarConnection, EventSink};
use crate::error::IpcError;

/// How often to retry the initial connection before giving up. The window
/// manager may still be starting when the panel spawns its applets.
const CONNECT_ATTEMPTS: u32 = 5;
const CONNECT_RETRY_PAUSE: Duration = Duration::from_millis(300);

/// A live connection to i3.
///
/// Owned by the UI thread; the event-delivery thread spawned by
/// [`subscribe`](BarConnection::subscribe) never touches the request
/// connection held here.
pub struct I3Ipc {
    conn: RefCell<Option<I3Connection>>,
    closed: Arc<AtomicBool>,
    subscribed: Cell<bool>,
}

impl I3Ipc {
    /// Connects to i3, retrying a few times before giving up.
    ///
    /// # Errors
    ///
    /// Returns [`IpcError::Connect`] with the last establish error once
    /// the retry budget is exhausted.
    pub fn connect() -> Result<Self, IpcError> {
        let conn = connect_with_retry()?;
        Ok(I3Ipc {
            conn: RefCell::new(Some(conn)),
            closed: Arc::new(AtomicBool::new(false)),
            subscribed: Cell::new(false),
        })
    }

    /// A connection that was never established. The closed-state paths
    /// are the same as for a live connection that was closed.
    #[cfg(test)]
    fn disconnected() -> Self {
        I3Ipc {
            conn: RefCell::new(None),
            closed: Arc::new(AtomicBool::new(false)),
            subscribed: Cell::new(false),
        }
    }

    fn with_conn<T>(
        &self,
        f: impl FnOnce(&mut I3Connection) -> Result<T, i3ipc::MessageError>,
    ) -> Result<T, IpcError> {
        let mut guard = self.conn.borrow_mut();
        let conn = guard.as_mut().ok_or(IpcError::Closed)?;
        Ok(f(conn)?)
    }
}

fn connect_with_retry() -> Result<I3Connection, IpcError> {
    for attempt in 1..CONNECT_ATTEMPTS {
        match I3Connection::connect() {
            Ok(conn) => return Ok(conn),
            Err(err) => {
                warn!("connection attempt {attempt} failed: {err}");
                thread::sleep(CONNECT_RETRY_PAUSE);
            }
        }
    }
    Ok(I3Connection::connect()?)
}

/// The raw i3 key a [`ColorableBarPart`] was parsed from; the inverse of
/// the `i3ipc` crate's own key-to-variant mapping. `None` for
/// [`ColorableBarPart::Unknown`], whose original key is not preserved.
fn bar_part_key(part: &i3ipc::reply::ColorableBarPart) -> Option<&'static str> {
    use i3ipc::reply::ColorableBarPart;
    Some(match part {
        ColorableBarPart::Background => "background",
        ColorableBarPart::Statusline => "statusline",
        ColorableBarPart::Separator => "separator",
        ColorableBarPart::FocusedWorkspaceText => "focused_workspace_text",
        ColorableBarPart::FocusedWorkspaceBg => "focused_workspace_bg",
        ColorableBarPart::FocusedWorkspaceBorder => "focused_workspace_border",
        ColorableBarPart::ActiveWorkspaceText => "active_workspace_text",
        ColorableBarPart::ActiveWorkspaceBg => "active_workspace_bg",
        ColorableBarPart::ActiveWorkspaceBorder => "active_workspace_border",
        ColorableBarPart::InactiveWorkspaceText => "inactive_workspace_text",
        ColorableBarPart::InactiveWorkspaceBg => "inactive_workspace_bg",
        ColorableBarPart::InactiveWorkspaceBorder => "inactive_workspace_border",
        ColorableBarPart::UrgentWorkspaceText => "urgent_workspace_text",
        ColorableBarPart::UrgentWorkspaceBg => "urgent_workspace_bg",
        ColorableBarPart::UrgentWorkspaceBorder => "urgent_workspace_border",
        ColorableBarPart::BindingModeText => "binding_mode_text",
        ColorableBarPart::BindingModeBg => "binding_mode_bg",
        ColorableBarPart::BindingModeBorder => "binding_mode_border",
        ColorableBarPart::Unknown => return None,
    })
}

fn snapshot(ws: &i3ipc::reply::Workspace) -> WorkspaceInfo {
    WorkspaceInfo {
        num: ws.num,
        name: ws.name.clone(),
        focused: ws.focused,
        urgent: ws.urgent,
    }
}

impl BarConnection for I3Ipc {
    fn get_workspaces(&self) -> Result<Vec<WorkspaceInfo>, IpcError> {
        let reply = self.with_conn(|conn| conn.get_workspaces())?;
        Ok(reply.workspaces.iter().map(snapshot).collect())
    }

    fn get_bar_config_ids(&self) -> Result<Vec<String>, IpcError> {
        let reply = self.with_conn(|conn| conn.get_bar_ids())?;
        Ok(reply.ids)
    }

    fn get_bar_config(&self, id: &str) -> Result<BarConfigSnapshot, IpcError> {
        let reply = self.with_conn(|conn| conn.get_bar_config(id))?;
        Ok(BarConfigSnapshot {
            colors: reply
                .colors
                .into_iter()
                .filter_map(|(part, value)| {
                    bar_part_key(&part).map(|key| (key.to_string(), value))
                })
                .collect(),
        })
    }

    fn go_to_workspace(&self, name: &str) -> Result<(), IpcError> {
        debug!("go to workspace: {name}");
        // Quote the name so workspaces with spaces survive the command
        // parser.
        let command = format!("workspace \"{}\"", name.replace('"', "\\\""));
        self.with_conn(|conn| conn.run_command(&command))?;
        Ok(())
    }

    fn subscribe(&self, sink: EventSink) -> Result<(), IpcError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(IpcError::Closed);
        }
        debug!("subscribing to workspace and mode events");
        let mut listener = I3EventListener::connect()?;
        listener.subscribe(&[Subscription::Workspace, Subscription::Mode])?;
        // The listener socket cannot carry requests, so the refetch after
        // a workspace event needs its own connection, owned by the event
        // thread.
        let refetch = connect_with_retry()?;

        let closed = Arc::clone(&self.closed);
        thread::spawn(move || event_loop(listener, refetch, sink, closed));
        self.subscribed.set(true);
        Ok(())
    }

    fn close(&self) {
        if self.closed.swap(true, Ordering::SeqCst) {
            debug!("close called on an already-closed connection");
            return;
        }
        debug!("closing the window manager connection");
        let conn = self.conn.borrow_mut().take();
        if self.subscribed.get() {
            if let Some(mut conn) = conn {
                // The listener socket has no shutdown handle, so the event
                // thread may be parked in a blocking read. i3 emits a mode
                // event for every mode command; that wakes the listener,
                // which then observes the closed flag and exits. Side
                // effect: teardown returns the user to the default binding
                // mode.
                if let Err(err) = conn.run_command("mode \"default\"") {
                    debug!("listener wake command failed: {err}");
                }
            }
        }
    }
}

fn event_loop(
    mut listener: I3EventListener,
    mut refetch: I3Connection,
    sink: EventSink,
    closed: Arc<AtomicBool>,
) {
    debug!("event thread started");
    for event in listener.listen() {
        if closed.load(Ordering::SeqCst) {
            break;
        }
        match event {
            Ok(Event::WorkspaceEvent(_)) => {
                debug!("workspace event");
                // The event payload is not used; a fresh snapshot of the
                // whole list is fetched instead.
                match refetch.get_workspaces() {
                    Ok(reply) => {
                        (sink.on_workspaces)(reply.workspaces.iter().map(snapshot).collect());
                    }
                    Err(err) => {
                        error!("workspace refetch failed, stopping event delivery: {err}");
                        break;
                    }
                }
            }
            Ok(Event::ModeEvent(info)) => {
                debug!("mode event: {}", info.change);
                (sink.on_mode)(ModeChange::new(info.change));
            }
            Ok(_) => {}
            Err(err) => {
                if !closed.load(Ordering::SeqCst) {
                    error!("event stream ended: {err}");
                }
                break;
            }
        }
    }
    debug!("event thread finished");
}
