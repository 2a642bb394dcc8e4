use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use log::{error, info};
use tokio::sync::Mutex;
use crate::address::enums::address_error::AddressError;
use crate::address::structs::address_cache::AddressCache;
use crate::connection::structs::tracker_connection::TrackerConnection;

pub const ADDRESS_SEPARATOR: &str = " - ";
const LIST_ADDRESSES: &str = "list-addresses";

/// Finds `username`'s address among `<username> - <host:port>` lines.
pub fn find_address(store: &str, username: &str) -> Option<String>
{
    store
        .lines()
        .filter_map(|line| line.split_once(ADDRESS_SEPARATOR))
        .find(|(user, _)| *user == username)
        .map(|(_, address)| address.trim().to_string())
}

impl AddressCache {
    pub fn new(store: PathBuf, connection: Arc<TrackerConnection>) -> AddressCache
    {
        AddressCache {
            store: Mutex::new(store),
            connection,
        }
    }

    /// Fetches `list-addresses` and overwrites the store with the reply body.
    #[tracing::instrument(level = "debug")]
    pub async fn refresh(&self) -> Result<(), AddressError>
    {
        let addresses = self.connection.send_message(LIST_ADDRESSES).await.map_err(|e| {
            error!("[ADDRESS] Getting addresses from the tracker failed: {e}");
            AddressError::Connection(e)
        })?;

        let store = self.store.lock().await;
        write_store(&store, &addresses).await?;
        info!("[ADDRESS] Address file updated.");
        Ok(())
    }

    #[tracing::instrument(level = "debug")]
    pub async fn address_of(&self, username: &str) -> Result<String, AddressError>
    {
        let store = self.store.lock().await;
        let contents = match tokio::fs::read_to_string(&*store).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(AddressError::UserNotFound),
            Err(e) => {
                error!("[ADDRESS] Address file reading failed: {e}");
                return Err(AddressError::Io(e));
            }
        };
        find_address(&contents, username).ok_or(AddressError::UserNotFound)
    }

    /// Refreshes every `interval` until `rx` flips or a refresh fails.
    pub async fn run(&self, interval: Duration, mut rx: tokio::sync::watch::Receiver<bool>)
    {
        loop {
            if let Err(e) = self.refresh().await {
                error!("[ADDRESS] Refresh stopped: {e}");
                return;
            }
            tokio::select! {
                _ = rx.changed() => {
                    info!("[ADDRESS] Stopping the address refresh...");
                    return;
                }
                _ = tokio::time::sleep(interval) => {}
            }
        }
    }
}

async fn write_store(path: &Path, addresses: &str) -> Result<(), AddressError>
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, addresses).await.map_err(|e| {
        error!("[ADDRESS] Writing to the address file failed: {e}");
        AddressError::Io(e)
    })
}
