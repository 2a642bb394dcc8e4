use tokio::io::BufReader;
use tokio::net::TcpStream;
use tokio::sync::Mutex;

#[derive(Debug)]
pub struct TrackerConnection {
    pub(crate) address: String,
    pub(crate) stream: Mutex<Option<BufReader<TcpStream>>>,
}
