//! Shared test fixtures: an in-memory [`BarConnection`] and snapshot
//! helpers.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use i3mate_core::types::workspace::WorkspaceInfo;
use i3mate_ipc::{BarConfigSnapshot, BarConnection, EventSink, IpcError};

pub fn ws(num: i32, name: &str, focused: bool, urgent: bool) -> WorkspaceInfo {
    WorkspaceInfo::new(num, name, focused, urgent)
}

/// An in-memory window manager connection.
///
/// Registration order of bars is the vec order in `bar_ids`; queries and
/// commands are recorded for assertions. `subscribe` stores the sink so a
/// test can play the event-delivery thread itself.
#[derive(Default)]
pub struct MockConnection {
    pub workspaces: RefCell<Vec<WorkspaceInfo>>,
    pub bar_ids: RefCell<Vec<String>>,
    pub bar_configs: RefCell<HashMap<String, BarConfigSnapshot>>,
    pub config_fetches: RefCell<Vec<String>>,
    pub commands: RefCell<Vec<String>>,
    pub close_calls: Cell<u32>,
    pub sink: RefCell<Option<EventSink>>,
}

impl MockConnection {
    pub fn add_bar(&self, id: &str, colors: HashMap<String, String>) {
        self.bar_ids.borrow_mut().push(id.to_string());
        self.bar_configs
            .borrow_mut()
            .insert(id.to_string(), BarConfigSnapshot { colors });
    }

    pub fn set_workspaces(&self, workspaces: Vec<WorkspaceInfo>) {
        *self.workspaces.borrow_mut() = workspaces;
    }

    pub fn take_sink(&self) -> EventSink {
        self.sink
            .borrow_mut()
            .take()
            .expect("subscribe was not called")
    }
}

impl BarConnection for MockConnection {
    fn get_workspaces(&self) -> Result<Vec<WorkspaceInfo>, IpcError> {
        Ok(self.workspaces.borrow().clone())
    }

    fn get_bar_config_ids(&self) -> Result<Vec<String>, IpcError> {
        Ok(self.bar_ids.borrow().clone())
    }

    fn get_bar_config(&self, id: &str) -> Result<BarConfigSnapshot, IpcError> {
        self.config_fetches.borrow_mut().push(id.to_string());
        Ok(self
            .bar_configs
            .borrow()
            .get(id)
            .cloned()
            .unwrap_or_default())
    }

    fn go_to_workspace(&self, name: &str) -> Result<(), IpcError> {
        self.commands.borrow_mut().push(name.to_string());
        Ok(())
    }

    fn subscribe(&self, sink: EventSink) -> Result<(), IpcError> {
        self.sink.borrow_mut().replace(sink);
        Ok(())
    }

    fn close(&self) {
        self.close_calls.set(self.close_calls.get() + 1);
    }
}
