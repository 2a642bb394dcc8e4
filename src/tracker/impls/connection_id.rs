use std::fmt;
use std::fmt::Formatter;
use crate::tracker::structs::connection_id::ConnectionId;

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
