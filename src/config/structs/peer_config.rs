use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PeerConfig {
    pub tracker_address: String,
    pub address_file: String,
    pub download_dir: String,
    pub workers: usize,
    /// Seconds between two address cache refreshes.
    pub address_refresh_interval: u64,
    /// Seconds the download pool gets to finish before it is aborted.
    pub shutdown_grace: u64,
}
