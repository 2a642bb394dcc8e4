use std::fmt;
use std::fmt::Formatter;
use log::{debug, warn};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use crate::codec::codec::{encode_file_request, receive_file};
use crate::transfer::enums::download_error::DownloadError;
use crate::transfer::structs::transfer_task::TransferTask;

impl TransferTask {
    /// Fetches the remote file into `local_path` over a fresh connection to the
    /// owning peer. Returns the number of bytes received.
    pub async fn download(&self) -> Result<u64, DownloadError>
    {
        let mut stream = TcpStream::connect((self.peer_host.as_str(), self.peer_port)).await?;
        stream.write_all(encode_file_request(&self.remote_path).as_bytes()).await?;
        stream.flush().await?;
        debug!("[TRANSFER] Requested {} from {}", self.remote_path, self);

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.local_path)
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::AlreadyExists => DownloadError::FileExists(self.local_path.display().to_string()),
                _ => DownloadError::Io(e),
            })?;

        match receive_file(&mut stream, &mut file).await {
            Ok(length) => Ok(length),
            Err(e) => {
                drop(file);
                if let Err(remove) = tokio::fs::remove_file(&self.local_path).await {
                    warn!("[TRANSFER] Could not remove partial file {}: {remove}", self.local_path.display());
                }
                Err(DownloadError::Transfer(e))
            }
        }
    }
}

impl fmt::Display for TransferTask {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if self.peer_host.contains(':') {
            write!(f, "[{}]:{}", self.peer_host, self.peer_port)
        } else {
            write!(f, "{}:{}", self.peer_host, self.peer_port)
        }
    }
}
