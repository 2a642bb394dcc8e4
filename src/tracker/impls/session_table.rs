use log::debug;
use crate::tracker::enums::session_state::SessionState;
use crate::tracker::structs::connection_id::ConnectionId;
use crate::tracker::structs::session_table::SessionTable;

impl SessionTable {
    pub fn new() -> SessionTable
    {
        SessionTable::default()
    }

    pub fn len(&self) -> usize
    {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.bindings.is_empty()
    }

    pub fn state(&self, connection: ConnectionId) -> SessionState
    {
        match self.bindings.get(&connection) {
            None => SessionState::Unbound,
            Some(username) => SessionState::Bound(username.clone()),
        }
    }

    /// Binds an unbound channel to `username`. Returns `false` when the channel is
    /// already bound to somebody else; the binding is left untouched in that case.
    pub fn bind(&mut self, connection: ConnectionId, username: &str) -> bool
    {
        match self.bindings.get(&connection) {
            Some(bound) => bound == username,
            None => {
                debug!("[SESSION] Channel {connection} bound to {username}");
                self.bindings.insert(connection, username.to_string());
                true
            }
        }
    }

    pub fn unbind(&mut self, connection: ConnectionId) -> Option<String>
    {
        self.bindings.remove(&connection)
    }
}
