use std::net::SocketAddr;
use log::info;
use tokio::task::JoinHandle;
use crate::file_server::structs::peer_file_server::PeerFileServer;

/// Binds the file server and serves until `rx` flips. Returns the bound address
/// and the handle of the serving loop.
pub async fn file_server_service(bind_address: &str, rx: tokio::sync::watch::Receiver<bool>) -> std::io::Result<(SocketAddr, JoinHandle<()>)>
{
    let file_server = PeerFileServer::new(bind_address).await?;
    let address = file_server.local_addr()?;
    info!("[FILE SERVER] Starting a file server listener on {address}");
    let handle = tokio::spawn(async move {
        file_server.start(rx).await;
    });
    Ok((address, handle))
}
