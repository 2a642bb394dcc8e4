use std::path::PathBuf;

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct TransferTask {
    pub peer_host: String,
    pub peer_port: u16,
    pub remote_path: String,
    pub local_path: PathBuf,
}
