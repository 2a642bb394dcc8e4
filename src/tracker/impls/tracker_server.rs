use std::net::SocketAddr;
use log::{debug, error, info};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinSet;
use crate::codec::codec::{write_reply, BUFFER_SIZE};
use crate::tracker::enums::tracker_event::TrackerEvent;
use crate::tracker::structs::command_dispatcher::CommandDispatcher;
use crate::tracker::structs::connection_id::ConnectionId;
use crate::tracker::structs::tracker_server::TrackerServer;
use crate::tracker::tracker::QUEUE_SIZE;

impl TrackerServer {
    #[tracing::instrument(level = "debug")]
    pub async fn new(bind_address: &str) -> tokio::io::Result<TrackerServer>
    {
        let listener = TcpListener::bind(bind_address).await?;
        Ok(TrackerServer { listener })
    }

    pub fn local_addr(&self) -> tokio::io::Result<SocketAddr>
    {
        self.listener.local_addr()
    }

    /// Accepts channels until `rx` flips, then aborts the open channels and waits
    /// for the dispatcher to drain.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn start(self, mut rx: tokio::sync::watch::Receiver<bool>)
    {
        let (events_tx, events_rx) = mpsc::channel::<TrackerEvent>(QUEUE_SIZE);
        let dispatcher = tokio::spawn(CommandDispatcher::new().run(events_rx));

        let mut connections = JoinSet::new();
        let mut next_id = 0u64;

        loop {
            tokio::select! {
                _ = rx.changed() => {
                    info!("[TRACKER] Stopping the server listener...");
                    break;
                }
                Some(_) = connections.join_next(), if !connections.is_empty() => {}
                accepted = self.listener.accept() => {
                    match accepted {
                        Ok((stream, peer)) => {
                            next_id += 1;
                            let connection = ConnectionId(next_id);
                            info!("[TRACKER] Client connected: {peer} (channel {connection})");
                            connections.spawn(TrackerServer::handle_connection(stream, peer, connection, events_tx.clone()));
                        }
                        Err(e) => error!("[TRACKER] Accept failed: {e}"),
                    }
                }
            }
        }

        connections.abort_all();
        while connections.join_next().await.is_some() {}
        drop(events_tx);
        if let Err(e) = dispatcher.await {
            error!("[TRACKER] Dispatcher task failed: {e}");
        }
    }

    /// Moves bytes for one channel. Every read is taken as one whole command.
    pub async fn handle_connection(stream: TcpStream, peer: SocketAddr, connection: ConnectionId, events: mpsc::Sender<TrackerEvent>)
    {
        let (mut reader, mut writer) = stream.into_split();
        let mut buffer = [0u8; BUFFER_SIZE];

        loop {
            let read = match reader.read(&mut buffer).await {
                Ok(0) => break,
                Ok(read) => read,
                Err(e) => {
                    debug!("[TRACKER] Read failed on channel {connection}: {e}");
                    break;
                }
            };
            let command = String::from_utf8_lossy(&buffer[..read]).trim().to_string();
            debug!("[TRACKER] {peer} -> {command}");

            let (reply_tx, reply_rx) = oneshot::channel();
            let event = TrackerEvent::Command { connection, ip: peer.ip(), command, reply: reply_tx };
            if events.send(event).await.is_err() {
                break;
            }
            let Ok(outcome) = reply_rx.await else {
                break;
            };
            if let Err(e) = write_reply(&mut writer, &outcome.reply).await {
                debug!("[TRACKER] Write failed on channel {connection}: {e}");
                break;
            }
            if outcome.close_connection {
                break;
            }
        }

        let _ = events.send(TrackerEvent::Closed { connection }).await;
        let _ = writer.shutdown().await;
        info!("[TRACKER] Client disconnected: {peer} (channel {connection})");
    }
}
