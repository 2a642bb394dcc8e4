use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use futures_util::future::join_all;
use log::{error, info, warn};
use parking_lot::Mutex;
use tokio::sync::watch;
use crate::address::address::address_refresh_service;
use crate::address::structs::address_cache::AddressCache;
use crate::codec::codec::command_prefix;
use crate::config::structs::peer_config::PeerConfig;
use crate::connection::enums::connection_error::ConnectionError;
use crate::connection::structs::tracker_connection::TrackerConnection;
use crate::file_server::file_server::file_server_service;
use crate::peer::peer::{announce_prefix, rewrite_register, rewrite_unregister, REPLY_DOWNLOAD_QUEUED, REPLY_STOPPED, REPLY_STOP_FAILED};
use crate::peer::structs::line_outcome::LineOutcome;
use crate::peer::structs::peer_client::PeerClient;
use crate::tracker::tracker::REPLY_USERNAME_FREE;
use crate::transfer::structs::transfer_engine::TransferEngine;

impl LineOutcome {
    pub fn keep(output: String) -> LineOutcome
    {
        LineOutcome { output, keep_running: true }
    }

    pub fn stop(output: String) -> LineOutcome
    {
        LineOutcome { output, keep_running: false }
    }
}

impl PeerClient {
    /// Asks the tracker whether `username` is free. The link must already be open.
    pub async fn claim_username(connection: &TrackerConnection, username: &str) -> Result<bool, ConnectionError>
    {
        let reply = connection.send_message(&format!("connect {username}")).await?;
        Ok(reply.trim() == REPLY_USERNAME_FREE)
    }

    /// Binds the file server on `file_server_bind` and starts the address refresh
    /// and the download pool. The port actually bound is the one announced to the
    /// tracker.
    #[tracing::instrument(level = "debug", skip(config, connection))]
    pub async fn start(username: &str, file_server_bind: &str, config: &PeerConfig, connection: Arc<TrackerConnection>) -> std::io::Result<PeerClient>
    {
        let (shutdown, rx) = watch::channel(false);

        let (file_server_address, file_server) = file_server_service(file_server_bind, rx.clone()).await?;

        let addresses = Arc::new(AddressCache::new(PathBuf::from(&config.address_file), connection.clone()));
        let refresh = address_refresh_service(addresses.clone(), Duration::from_secs(config.address_refresh_interval), rx);

        let transfers = TransferEngine::new(
            addresses.clone(),
            connection.clone(),
            announce_prefix(file_server_address.port(), username),
            PathBuf::from(&config.download_dir),
            config.workers,
            Duration::from_secs(config.shutdown_grace),
        );

        info!("[PEER] {username} is sharing files on {file_server_address}");
        Ok(PeerClient {
            username: username.to_string(),
            file_server_address,
            connection,
            addresses,
            transfers,
            shutdown,
            tasks: Mutex::new(vec![file_server, refresh]),
        })
    }

    pub fn username(&self) -> &str
    {
        &self.username
    }

    pub fn file_server_address(&self) -> SocketAddr
    {
        self.file_server_address
    }

    pub fn addresses(&self) -> &AddressCache
    {
        &self.addresses
    }

    /// Forwards `command` to the tracker as is and returns the reply body, or the
    /// error text when the link failed.
    pub async fn server_command(&self, command: &str) -> String
    {
        match self.connection.send_message(command).await {
            Ok(reply) => reply,
            Err(e) => {
                error!("[PEER] Tracker communication failed: {e}");
                e.to_string()
            }
        }
    }

    pub async fn register(&self, command: &str) -> String
    {
        self.server_command(&rewrite_register(command, self.file_server_address.port(), &self.username)).await
    }

    pub async fn unregister(&self, command: &str) -> String
    {
        self.server_command(&rewrite_unregister(command, &self.username)).await
    }

    pub async fn download(&self, command: &str) -> String
    {
        match self.transfers.submit(command).await {
            Ok(_) => REPLY_DOWNLOAD_QUEUED.to_string(),
            Err(e) => {
                error!("[PEER] Downloading failed: {e}");
                e.to_string()
            }
        }
    }

    pub async fn handle_line(&self, line: &str) -> LineOutcome
    {
        let line = line.trim();
        match command_prefix(line) {
            "disconnect" => LineOutcome::stop(self.stop().await),
            "download" => LineOutcome::keep(self.download(line).await),
            "register" => LineOutcome::keep(self.register(line).await),
            "unregister" => LineOutcome::keep(self.unregister(line).await),
            _ => LineOutcome::keep(self.server_command(line).await),
        }
    }

    /// Stops serving, drains the download pool, stops the refresh task, then says
    /// `disconnect` to the tracker and closes the link.
    pub async fn stop(&self) -> String
    {
        let _ = self.shutdown.send(true);
        self.transfers.shutdown().await;

        let tasks: Vec<_> = self.tasks.lock().drain(..).collect();
        for result in join_all(tasks).await {
            if let Err(e) = result {
                warn!("[PEER] Background task ended abnormally: {e}");
            }
        }

        match self.connection.send_message("disconnect").await {
            Ok(reply) => info!("[PEER] Tracker: {reply}"),
            Err(e) => warn!("[PEER] Disconnect request failed: {e}"),
        }
        match self.connection.close().await {
            Ok(()) => REPLY_STOPPED.to_string(),
            Err(e) => {
                error!("[PEER] Tracker connection closing failed: {e}");
                REPLY_STOP_FAILED.to_string()
            }
        }
    }
}
