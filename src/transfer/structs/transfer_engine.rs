use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use crate::address::structs::address_cache::AddressCache;
use crate::transfer::structs::transfer_task::TransferTask;

#[derive(Debug)]
pub struct TransferEngine {
    pub(crate) sender: Mutex<Option<mpsc::UnboundedSender<TransferTask>>>,
    pub(crate) workers: Mutex<Vec<JoinHandle<()>>>,
    pub(crate) addresses: Arc<AddressCache>,
    pub(crate) download_dir: PathBuf,
    pub(crate) shutdown_grace: Duration,
}
