use std::collections::BTreeSet;
use std::net::{IpAddr, SocketAddr};
use log::{debug, error, info};
use tokio::sync::mpsc;
use crate::codec::structs::reply::Reply;
use crate::registry::structs::registry::Registry;
use crate::registry::structs::user_record::UserRecord;
use crate::tracker::enums::command::Command;
use crate::tracker::enums::tracker_event::TrackerEvent;
use crate::tracker::structs::command_dispatcher::CommandDispatcher;
use crate::tracker::structs::connection_id::ConnectionId;
use crate::tracker::structs::dispatch_outcome::DispatchOutcome;
use crate::tracker::structs::session_table::SessionTable;
use crate::tracker::tracker::{REPLY_DISCONNECTED, REPLY_INVALID_PORT, REPLY_NO_ADDRESSES, REPLY_NO_FILES, REPLY_REGISTERED, REPLY_SESSION_CONFLICT, REPLY_SESSION_UNBOUND, REPLY_UNKNOWN_COMMAND, REPLY_UNREGISTERED, REPLY_USERNAME_FREE, REPLY_USERNAME_TAKEN};

impl DispatchOutcome {
    pub fn keep(reply: Reply) -> DispatchOutcome
    {
        DispatchOutcome { reply, close_connection: false }
    }

    pub fn close(reply: Reply) -> DispatchOutcome
    {
        DispatchOutcome { reply, close_connection: true }
    }
}

fn listing(lines: BTreeSet<String>, message_if_empty: &str) -> Reply
{
    if lines.is_empty() {
        return Reply::single(message_if_empty);
    }
    Reply::from_lines(lines)
}

/// Inserts `address` as the new second token of the incoming download line.
fn insert_address(command: &str, address: &str) -> String
{
    match command.split_once(char::is_whitespace) {
        Some((prefix, rest)) => format!("{prefix} {address} {}", rest.trim_start()),
        None => format!("{command} {address}"),
    }
}

impl CommandDispatcher {
    pub fn new() -> CommandDispatcher
    {
        CommandDispatcher::default()
    }

    pub fn registry(&self) -> &Registry
    {
        &self.registry
    }

    pub fn sessions(&self) -> &SessionTable
    {
        &self.sessions
    }

    /// Executes one trimmed command line received on `connection` from `ip`.
    #[tracing::instrument(level = "debug")]
    pub fn execute(&mut self, connection: ConnectionId, command: &str, ip: IpAddr) -> DispatchOutcome
    {
        match Command::parse(command) {
            Command::Connect { username } => {
                let reply = if self.registry.username_taken(&username) { REPLY_USERNAME_TAKEN } else { REPLY_USERNAME_FREE };
                DispatchOutcome::keep(Reply::single(reply))
            }
            Command::Register { port, username, files } => {
                let Some(port) = port else {
                    error!("[TRACKER] Parsing of the port failed: {command}");
                    return DispatchOutcome::keep(Reply::single(REPLY_INVALID_PORT));
                };
                if !self.sessions.bind(connection, &username) {
                    return self.session_conflict(connection, &username);
                }
                let address = SocketAddr::new(ip, port).to_string();
                match self.registry.register(&username, UserRecord::new(address, files)) {
                    Ok(()) => DispatchOutcome::keep(Reply::single(REPLY_REGISTERED)),
                    Err(e) => {
                        error!("[TRACKER] Register failed: {e}");
                        DispatchOutcome::keep(Reply::single(&e.to_string()))
                    }
                }
            }
            Command::Unregister { username, files } => {
                if !self.sessions.bind(connection, &username) {
                    return self.session_conflict(connection, &username);
                }
                match self.registry.unregister(&username, &files) {
                    Ok(()) => DispatchOutcome::keep(Reply::single(REPLY_UNREGISTERED)),
                    Err(e) => {
                        error!("[TRACKER] Unregister failed: {e}");
                        DispatchOutcome::keep(Reply::single(&e.to_string()))
                    }
                }
            }
            Command::ListFiles => DispatchOutcome::keep(listing(self.registry.list_files(), REPLY_NO_FILES)),
            Command::ListAddresses => DispatchOutcome::keep(listing(self.registry.list_addresses(), REPLY_NO_ADDRESSES)),
            Command::Download { username, path } => {
                match self.registry.address_of_file(&username, &path) {
                    Ok(address) => DispatchOutcome::keep(Reply::single(&insert_address(command, &address))),
                    Err(e) => DispatchOutcome::keep(Reply::single(&e.to_string())),
                }
            }
            Command::Disconnect => {
                let reply = match self.sessions.unbind(connection) {
                    None => REPLY_SESSION_UNBOUND.to_string(),
                    Some(username) => match self.registry.disconnect(&username) {
                        Ok(_) => {
                            info!("[TRACKER] {username} disconnected from channel {connection}");
                            REPLY_DISCONNECTED.to_string()
                        }
                        Err(e) => e.to_string(),
                    },
                };
                DispatchOutcome::close(Reply::single(&reply))
            }
            Command::Unknown => DispatchOutcome::keep(Reply::single(REPLY_UNKNOWN_COMMAND)),
        }
    }

    fn session_conflict(&self, connection: ConnectionId, username: &str) -> DispatchOutcome
    {
        debug!("[SESSION] Channel {connection} rejected a privileged command for {username}");
        DispatchOutcome::keep(Reply::single(REPLY_SESSION_CONFLICT))
    }

    /// Transport-close path: drops the channel's binding and the bound user's record.
    #[tracing::instrument(level = "debug")]
    pub fn close(&mut self, connection: ConnectionId)
    {
        if let Some(username) = self.sessions.unbind(connection) {
            match self.registry.disconnect(&username) {
                Ok(_) => info!("[TRACKER] {username} left with channel {connection}"),
                Err(e) => error!("[TRACKER] Disconnect failed: {e} (channel {connection})"),
            }
        }
    }

    /// Consumes tracker events until every sender is gone.
    pub async fn run(mut self, mut events: mpsc::Receiver<TrackerEvent>)
    {
        while let Some(event) = events.recv().await {
            match event {
                TrackerEvent::Command { connection, ip, command, reply } => {
                    let outcome = self.execute(connection, &command, ip);
                    if reply.send(outcome).is_err() {
                        debug!("[TRACKER] Channel {connection} went away before its reply");
                    }
                }
                TrackerEvent::Closed { connection } => self.close(connection),
            }
        }
        info!("[TRACKER] Dispatcher stopped with {} users registered", self.registry.len());
    }
}
