use std::net::SocketAddr;
use log::info;
use tokio::task::JoinHandle;
use crate::tracker::structs::tracker_server::TrackerServer;

pub const REPLY_USERNAME_FREE: &str = "Successful";
pub const REPLY_USERNAME_TAKEN: &str = "Unsuccessful";
pub const REPLY_REGISTERED: &str = "File(s) successfully registered!";
pub const REPLY_UNREGISTERED: &str = "File(s) successfully unregistered!";
pub const REPLY_DISCONNECTED: &str = "Successfully disconnected!";
pub const REPLY_SESSION_CONFLICT: &str = "This session is associated with another user.";
pub const REPLY_SESSION_UNBOUND: &str = "This session is not associated with any user!";
pub const REPLY_INVALID_PORT: &str = "Could not retrieve port.";
pub const REPLY_NO_FILES: &str = "There are no files registered!";
pub const REPLY_NO_ADDRESSES: &str = "There are no addresses available!";
pub const REPLY_UNKNOWN_COMMAND: &str = "Unknown command!";

pub const QUEUE_SIZE: usize = 1024;

/// Binds the tracker and runs it until `rx` flips. Returns the bound address and the
/// handle of the accept loop.
pub async fn tracker_service(bind_address: &str, rx: tokio::sync::watch::Receiver<bool>) -> std::io::Result<(SocketAddr, JoinHandle<()>)>
{
    let tracker_server = TrackerServer::new(bind_address).await?;
    let address = tracker_server.local_addr()?;
    info!("[TRACKER] Starting a server listener on {address}");
    let handle = tokio::spawn(async move {
        tracker_server.start(rx).await;
    });
    Ok((address, handle))
}
