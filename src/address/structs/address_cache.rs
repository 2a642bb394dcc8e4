use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use crate::connection::structs::tracker_connection::TrackerConnection;

#[derive(Debug)]
pub struct AddressCache {
    pub(crate) store: Mutex<PathBuf>,
    pub(crate) connection: Arc<TrackerConnection>,
}
