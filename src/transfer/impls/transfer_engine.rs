use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use futures_util::future::join_all;
use log::{debug, error, info, warn};
use parking_lot::Mutex;
use tokio::sync::mpsc;
use crate::address::structs::address_cache::AddressCache;
use crate::connection::structs::tracker_connection::TrackerConnection;
use crate::transfer::enums::download_error::DownloadError;
use crate::transfer::structs::download_request::DownloadRequest;
use crate::transfer::structs::transfer_engine::TransferEngine;
use crate::transfer::structs::transfer_task::TransferTask;
use crate::transfer::transfer::{local_path_for, split_address};

type TaskQueue = Arc<tokio::sync::Mutex<mpsc::UnboundedReceiver<TransferTask>>>;

impl TransferEngine {
    /// Starts `workers` workers. A finished download is announced to the tracker as
    /// `<announce_prefix> <local path>`, where the prefix is `register <port> <user>`.
    pub fn new(addresses: Arc<AddressCache>, connection: Arc<TrackerConnection>, announce_prefix: String, download_dir: PathBuf, workers: usize, shutdown_grace: Duration) -> TransferEngine
    {
        let (sender, receiver) = mpsc::unbounded_channel::<TransferTask>();
        let queue: TaskQueue = Arc::new(tokio::sync::Mutex::new(receiver));

        let handles = (0..workers.max(1))
            .map(|id| {
                tokio::spawn(TransferEngine::worker(id, queue.clone(), connection.clone(), announce_prefix.clone()))
            })
            .collect();
        info!("[TRANSFER] Started {} download workers", workers.max(1));

        TransferEngine {
            sender: Mutex::new(Some(sender)),
            workers: Mutex::new(handles),
            addresses,
            download_dir,
            shutdown_grace,
        }
    }

    pub fn is_running(&self) -> bool
    {
        self.sender.lock().is_some()
    }

    /// Resolves a `download` command into a task: looks the user up in the address
    /// cache, creates the destination directory and refuses to overwrite a file.
    #[tracing::instrument(level = "debug")]
    pub async fn prepare(&self, command: &str) -> Result<TransferTask, DownloadError>
    {
        let request = DownloadRequest::parse(command)?;
        let address = self.addresses.address_of(&request.username).await?;
        let (peer_host, peer_port) = split_address(&address)?;

        let directory = match &request.local_dir {
            Some(directory) => PathBuf::from(directory),
            None => self.download_dir.clone(),
        };
        tokio::fs::create_dir_all(&directory).await?;
        let local_path = local_path_for(&directory, &request.remote_path)?;
        if tokio::fs::try_exists(&local_path).await? {
            return Err(DownloadError::FileExists(local_path.display().to_string()));
        }

        Ok(TransferTask {
            peer_host,
            peer_port,
            remote_path: request.remote_path,
            local_path,
        })
    }

    /// Prepares the command and queues the task for the workers.
    pub async fn submit(&self, command: &str) -> Result<TransferTask, DownloadError>
    {
        if !self.is_running() {
            return Err(DownloadError::ShutDown);
        }
        let task = self.prepare(command).await.map_err(|e| {
            error!("[TRANSFER] Parsing of the command failed: {e}");
            e
        })?;

        let sender = self.sender.lock();
        let Some(sender) = sender.as_ref() else {
            return Err(DownloadError::ShutDown);
        };
        sender.send(task.clone()).map_err(|_| DownloadError::ShutDown)?;
        info!("[TRANSFER] Queued {} from {}", task.remote_path, task);
        Ok(task)
    }

    async fn worker(id: usize, queue: TaskQueue, connection: Arc<TrackerConnection>, announce_prefix: String)
    {
        loop {
            let next = queue.lock().await.recv().await;
            let Some(task) = next else {
                debug!("[TRANSFER] Worker {id} finished");
                return;
            };

            match task.download().await {
                Ok(length) => {
                    let local_path = task.local_path.display().to_string();
                    info!("[TRANSFER] Worker {id} received {local_path} ({length} bytes)");
                    let announce = format!("{announce_prefix} {local_path}");
                    match connection.send_message(&announce).await {
                        Ok(reply) => info!("[TRANSFER] File {local_path} successfully downloaded and registered: {reply}"),
                        Err(e) => error!("[TRANSFER] Registration of {local_path} on the tracker failed: {e}"),
                    }
                }
                Err(e) => error!("[TRANSFER] Download of {} from {} failed: {e}", task.remote_path, task),
            }
        }
    }

    /// Stops new submissions, gives the workers `shutdown_grace` to drain the
    /// queue, then aborts the rest.
    pub async fn shutdown(&self)
    {
        if self.sender.lock().take().is_none() {
            return;
        }
        let handles: Vec<_> = self.workers.lock().drain(..).collect();
        let abort_handles: Vec<_> = handles.iter().map(|handle| handle.abort_handle()).collect();

        if tokio::time::timeout(self.shutdown_grace, join_all(handles)).await.is_err() {
            warn!("[TRANSFER] Grace period of {} seconds elapsed, aborting the remaining downloads", self.shutdown_grace.as_secs());
            for handle in abort_handles {
                handle.abort();
            }
        }
        info!("[TRANSFER] Download service shut down.");
    }
}
