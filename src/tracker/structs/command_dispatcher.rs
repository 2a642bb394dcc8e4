use crate::registry::structs::registry::Registry;
use crate::tracker::structs::session_table::SessionTable;

#[derive(Debug, Default)]
pub struct CommandDispatcher {
    pub(crate) registry: Registry,
    pub(crate) sessions: SessionTable,
}
