use std::collections::HashMap;
use crate::tracker::structs::connection_id::ConnectionId;

#[derive(Debug, Default)]
pub struct SessionTable {
    pub(crate) bindings: HashMap<ConnectionId, String>,
}
