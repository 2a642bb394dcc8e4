use std::net::IpAddr;
use tokio::sync::oneshot;
use crate::tracker::structs::connection_id::ConnectionId;
use crate::tracker::structs::dispatch_outcome::DispatchOutcome;

#[derive(Debug)]
pub enum TrackerEvent {
    Command {
        connection: ConnectionId,
        ip: IpAddr,
        command: String,
        reply: oneshot::Sender<DispatchOutcome>,
    },
    Closed {
        connection: ConnectionId,
    },
}
