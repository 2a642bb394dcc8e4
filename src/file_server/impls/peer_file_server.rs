use std::net::SocketAddr;
use log::{debug, error, info};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use crate::codec::codec::{parse_file_request, send_file};
use crate::codec::enums::codec_error::CodecError;
use crate::file_server::structs::peer_file_server::PeerFileServer;

impl PeerFileServer {
    #[tracing::instrument(level = "debug")]
    pub async fn new(bind_address: &str) -> tokio::io::Result<PeerFileServer>
    {
        let listener = TcpListener::bind(bind_address).await?;
        info!("[FILE SERVER] File server created on {}", listener.local_addr()?);
        Ok(PeerFileServer { listener })
    }

    pub fn local_addr(&self) -> tokio::io::Result<SocketAddr>
    {
        self.listener.local_addr()
    }

    /// Serves clients one after another until `rx` flips or accepting fails.
    pub async fn start(self, mut rx: tokio::sync::watch::Receiver<bool>)
    {
        loop {
            tokio::select! {
                _ = rx.changed() => {
                    info!("[FILE SERVER] Stopping the file server...");
                    break;
                }
                accepted = self.listener.accept() => {
                    match accepted {
                        Ok((stream, peer)) => {
                            if let Err(e) = PeerFileServer::serve_client(stream, peer).await {
                                error!("[FILE SERVER] Sending file to {peer} failed: {e}");
                            }
                        }
                        Err(e) => {
                            error!("[FILE SERVER] File server failed: {e}");
                            break;
                        }
                    }
                }
            }
        }
    }

    /// One request/response exchange. Returns the number of bytes sent.
    pub async fn serve_client(stream: TcpStream, peer: SocketAddr) -> Result<u64, CodecError>
    {
        let (reader, mut writer) = stream.into_split();
        let mut line = String::new();
        BufReader::new(reader).read_line(&mut line).await?;

        let Some(path) = parse_file_request(&line) else {
            debug!("[FILE SERVER] Blank request from {peer}");
            return Ok(0);
        };

        let mut file = tokio::fs::File::open(path).await?;
        let length = file.metadata().await?.len();
        let sent = send_file(&mut writer, &mut file, length).await?;
        writer.shutdown().await?;
        info!("[FILE SERVER] Sent {path} ({sent} bytes) to {peer}");
        Ok(sent)
    }
}
