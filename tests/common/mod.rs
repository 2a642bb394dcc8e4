#![allow(dead_code)]
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncWriteExt, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use peer_tracker::codec::codec::{encode_request, read_reply};
use peer_tracker::codec::structs::reply::Reply;
use peer_tracker::config::structs::configuration::Configuration;
use peer_tracker::config::structs::peer_config::PeerConfig;
use peer_tracker::connection::structs::tracker_connection::TrackerConnection;
use peer_tracker::peer::structs::peer_client::PeerClient;
use peer_tracker::tracker::tracker::tracker_service;

pub struct TestTracker {
    pub address: SocketAddr,
    pub shutdown: watch::Sender<bool>,
    pub handle: JoinHandle<()>,
}

pub async fn start_tracker() -> TestTracker {
    let (shutdown, rx) = watch::channel(false);
    let (address, handle) = tracker_service("127.0.0.1:0", rx).await.unwrap();
    TestTracker { address, shutdown, handle }
}

/// Raw protocol client: one command, one reply envelope.
pub struct TestClient {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
}

impl TestClient {
    pub async fn connect(address: SocketAddr) -> TestClient {
        let (reader, writer) = TcpStream::connect(address).await.unwrap().into_split();
        TestClient { reader: BufReader::new(reader), writer }
    }

    pub async fn send(&mut self, command: &str) -> Reply {
        self.writer.write_all(encode_request(command).as_bytes()).await.unwrap();
        read_reply(&mut self.reader).await.unwrap()
    }

    pub async fn send_raw(&mut self, bytes: &[u8]) -> Reply {
        self.writer.write_all(bytes).await.unwrap();
        read_reply(&mut self.reader).await.unwrap()
    }

    pub fn reader(&mut self) -> &mut BufReader<OwnedReadHalf> {
        &mut self.reader
    }
}

pub fn peer_config(directory: &Path, tracker: SocketAddr) -> PeerConfig {
    let mut config = Configuration::init().peer;
    config.tracker_address = tracker.to_string();
    config.address_file = directory.join("addresses.txt").display().to_string();
    config.download_dir = directory.join("downloads").display().to_string();
    config.workers = 2;
    config.shutdown_grace = 2;
    config
}

pub async fn start_peer(username: &str, directory: &Path, tracker: SocketAddr) -> PeerClient {
    let config = peer_config(directory, tracker);
    let connection = Arc::new(TrackerConnection::new(&config.tracker_address));
    connection.connect().await.unwrap();
    assert!(PeerClient::claim_username(&connection, username).await.unwrap());
    PeerClient::start(username, "127.0.0.1:0", &config, connection).await.unwrap()
}

/// Polls `command` on a fresh tracker channel until its reply satisfies `check`.
pub async fn wait_for_reply<F>(tracker: SocketAddr, command: &str, check: F) -> Reply
where
    F: Fn(&Reply) -> bool,
{
    let mut client = TestClient::connect(tracker).await;
    for _ in 0..100 {
        let reply = client.send(command).await;
        if check(&reply) {
            return reply;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    panic!("Timed out waiting on '{command}'");
}
