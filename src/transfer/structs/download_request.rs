#[derive(PartialEq, Eq, Clone, Debug)]
pub struct DownloadRequest {
    pub username: String,
    pub remote_path: String,
    pub local_dir: Option<String>,
}
