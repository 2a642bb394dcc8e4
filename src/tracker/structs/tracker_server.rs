use tokio::net::TcpListener;

#[derive(Debug)]
pub struct TrackerServer {
    pub(crate) listener: TcpListener,
}
