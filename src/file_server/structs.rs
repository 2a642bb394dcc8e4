/// Listener serving file requests.
pub mod peer_file_server;
