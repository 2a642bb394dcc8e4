use std::path::{Path, PathBuf};
use crate::transfer::enums::download_error::DownloadError;

pub const DEFAULT_WORKERS: usize = 5;
pub const DEFAULT_SHUTDOWN_GRACE: u64 = 10;

/// Splits `host:port`. IPv6 hosts may come bracketed (`[::1]:9000`).
pub fn split_address(address: &str) -> Result<(String, u16), DownloadError>
{
    let Some((host, port)) = address.trim().rsplit_once(':') else {
        return Err(DownloadError::CorruptedAddress(address.to_string()));
    };
    let host = host.trim_start_matches('[').trim_end_matches(']');
    if host.is_empty() {
        return Err(DownloadError::CorruptedAddress(address.to_string()));
    }
    let port = port.parse::<u16>().map_err(|_| DownloadError::CorruptedAddress(format!("Parsing port of {address} failed!")))?;
    Ok((host.to_string(), port))
}

/// Destination of `remote_path` inside `directory`: the remote file name, kept as is.
pub fn local_path_for(directory: &Path, remote_path: &str) -> Result<PathBuf, DownloadError>
{
    let file_name = Path::new(remote_path).file_name().ok_or(DownloadError::MalformedCommand)?;
    Ok(directory.join(file_name))
}
