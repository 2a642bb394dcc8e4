use log::{error, info};
use tokio::io::{AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::sync::Mutex;
use crate::codec::codec::{encode_request, read_reply};
use crate::codec::structs::reply::Reply;
use crate::connection::enums::connection_error::ConnectionError;
use crate::connection::structs::tracker_connection::TrackerConnection;

impl TrackerConnection {
    pub fn new(address: &str) -> TrackerConnection
    {
        TrackerConnection {
            address: address.to_string(),
            stream: Mutex::new(None),
        }
    }

    #[tracing::instrument(level = "debug")]
    pub async fn connect(&self) -> Result<(), ConnectionError>
    {
        let stream = TcpStream::connect(&self.address).await.map_err(|e| {
            error!("[CONNECTION] Connection to {} failed: {e}", self.address);
            ConnectionError::Io(e)
        })?;
        *self.stream.lock().await = Some(BufReader::new(stream));
        info!("[CONNECTION] Connected to the tracker at {}", self.address);
        Ok(())
    }

    pub async fn is_connected(&self) -> bool
    {
        self.stream.lock().await.is_some()
    }

    /// Sends one command and waits for its whole reply. Returns the reply body,
    /// its lines joined with newlines. The stream is out of its slot for the whole
    /// exchange and only goes back once the reply is read, so a failure or a
    /// dropped call leaves the link closed and every later call fails with
    /// [`ConnectionError::NotConnected`].
    #[tracing::instrument(level = "debug")]
    pub async fn send_message(&self, command: &str) -> Result<String, ConnectionError>
    {
        let mut guard = self.stream.lock().await;
        let Some(mut stream) = guard.take() else {
            return Err(ConnectionError::NotConnected);
        };

        match TrackerConnection::exchange(&mut stream, command).await {
            Ok(reply) => {
                *guard = Some(stream);
                Ok(reply.body())
            }
            Err(e) => {
                error!("[CONNECTION] Retrieving the tracker reply failed: {e}");
                Err(e)
            }
        }
    }

    async fn exchange(stream: &mut BufReader<TcpStream>, command: &str) -> Result<Reply, ConnectionError>
    {
        let writer = stream.get_mut();
        writer.write_all(encode_request(command).as_bytes()).await?;
        writer.flush().await?;
        Ok(read_reply(stream).await?)
    }

    pub async fn close(&self) -> Result<(), ConnectionError>
    {
        let Some(mut stream) = self.stream.lock().await.take() else {
            return Err(ConnectionError::NotConnected);
        };
        stream.get_mut().shutdown().await?;
        info!("[CONNECTION] Connection closed.");
        Ok(())
    }
}
