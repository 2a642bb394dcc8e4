use std::net::SocketAddr;
use std::sync::Arc;
use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use crate::address::structs::address_cache::AddressCache;
use crate::connection::structs::tracker_connection::TrackerConnection;
use crate::transfer::structs::transfer_engine::TransferEngine;

#[derive(Debug)]
pub struct PeerClient {
    pub(crate) username: String,
    pub(crate) file_server_address: SocketAddr,
    pub(crate) connection: Arc<TrackerConnection>,
    pub(crate) addresses: Arc<AddressCache>,
    pub(crate) transfers: TransferEngine,
    pub(crate) shutdown: watch::Sender<bool>,
    pub(crate) tasks: Mutex<Vec<JoinHandle<()>>>,
}
