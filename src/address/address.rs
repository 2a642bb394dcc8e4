use std::sync::Arc;
use std::time::Duration;
use log::info;
use tokio::task::JoinHandle;
use crate::address::structs::address_cache::AddressCache;

/// Spawns the refresh loop for `cache`. The first refresh happens immediately.
pub fn address_refresh_service(cache: Arc<AddressCache>, interval: Duration, rx: tokio::sync::watch::Receiver<bool>) -> JoinHandle<()>
{
    info!("[ADDRESS] Starting the address refresh every {} seconds", interval.as_secs());
    tokio::spawn(async move {
        cache.run(interval, rx).await;
    })
}
