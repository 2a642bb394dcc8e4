use crate::codec::codec::split_command;
use crate::transfer::enums::download_error::DownloadError;
use crate::transfer::structs::download_request::DownloadRequest;

impl DownloadRequest {
    /// Parses `download <user> <remote path> [<local dir>]`.
    pub fn parse(command: &str) -> Result<DownloadRequest, DownloadError>
    {
        let (username, remote_path, local_dir) = match split_command(command).as_slice() {
            ["download", username, remote_path] => (*username, *remote_path, None),
            ["download", username, remote_path, local_dir] => (*username, *remote_path, Some(local_dir.to_string())),
            _ => return Err(DownloadError::MalformedCommand),
        };
        Ok(DownloadRequest {
            username: username.to_string(),
            remote_path: remote_path.to_string(),
            local_dir,
        })
    }
}
