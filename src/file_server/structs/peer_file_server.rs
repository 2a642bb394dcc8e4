use tokio::net::TcpListener;

#[derive(Debug)]
pub struct PeerFileServer {
    pub(crate) listener: TcpListener,
}
