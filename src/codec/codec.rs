use byteorder::{BigEndian, ByteOrder};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use crate::codec::enums::codec_error::CodecError;
use crate::codec::structs::reply::Reply;

pub const LINE_SEPARATOR: &str = "\n";
pub const BUFFER_SIZE: usize = 512;
pub const CHUNK_SIZE: usize = 1024;
pub const FILE_LENGTH_SIZE: usize = 8;
/// Upper bound on the lines reserved up front; the count itself comes off the wire.
pub const REPLY_PREALLOC_LINES: usize = 64;

pub fn encode_request(command: &str) -> String
{
    let mut request = command.trim_end_matches(['\r', '\n']).to_string();
    request.push_str(LINE_SEPARATOR);
    request
}

pub fn split_command(command: &str) -> Vec<&str>
{
    command.split_whitespace().collect()
}

pub fn command_prefix(command: &str) -> &str
{
    command.split_whitespace().next().unwrap_or("")
}

fn strip_line_ending(line: &mut String)
{
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
}

async fn read_line<R: AsyncBufRead + Unpin>(reader: &mut R) -> Result<String, CodecError>
{
    let mut line = String::new();
    if reader.read_line(&mut line).await? == 0 {
        return Err(CodecError::UnexpectedEof);
    }
    strip_line_ending(&mut line);
    Ok(line)
}

/// Reads one reply envelope: the count line, then exactly that many body lines.
pub async fn read_reply<R: AsyncBufRead + Unpin>(reader: &mut R) -> Result<Reply, CodecError>
{
    let count_line = read_line(reader).await?;
    let count = count_line.trim().parse::<usize>().map_err(|_| CodecError::MalformedCount(count_line.clone()))?;

    let mut lines = Vec::with_capacity(count.min(REPLY_PREALLOC_LINES));
    for _ in 0..count {
        lines.push(read_line(reader).await?);
    }
    Ok(Reply { lines })
}

pub async fn write_reply<W: AsyncWrite + Unpin>(writer: &mut W, reply: &Reply) -> Result<(), CodecError>
{
    writer.write_all(reply.encode().as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}

pub fn encode_file_length(length: u64) -> [u8; FILE_LENGTH_SIZE]
{
    let mut header = [0u8; FILE_LENGTH_SIZE];
    BigEndian::write_u64(&mut header, length);
    header
}

pub fn decode_file_length(header: &[u8]) -> Result<u64, CodecError>
{
    if header.len() < FILE_LENGTH_SIZE {
        return Err(CodecError::UnexpectedEof);
    }
    Ok(BigEndian::read_u64(&header[..FILE_LENGTH_SIZE]))
}

pub fn encode_file_request(path: &str) -> String
{
    encode_request(path)
}

/// Returns the requested path, or `None` for a blank (no-op) request line.
pub fn parse_file_request(line: &str) -> Option<&str>
{
    let path = line.trim_end_matches(['\r', '\n']);
    if path.trim().is_empty() {
        None
    } else {
        Some(path)
    }
}

/// Streams `length` bytes of `source` to `writer`, prefixed with the 8-byte length header.
pub async fn send_file<W, F>(writer: &mut W, source: &mut F, length: u64) -> Result<u64, CodecError>
where
    W: AsyncWrite + Unpin,
    F: AsyncRead + Unpin,
{
    writer.write_all(&encode_file_length(length)).await?;

    let mut buffer = [0u8; CHUNK_SIZE];
    let mut remaining = length;
    while remaining > 0 {
        let wanted = remaining.min(CHUNK_SIZE as u64) as usize;
        let read = source.read(&mut buffer[..wanted]).await?;
        if read == 0 {
            return Err(CodecError::UnexpectedEof);
        }
        writer.write_all(&buffer[..read]).await?;
        remaining -= read as u64;
    }
    writer.flush().await?;
    Ok(length)
}

/// Reads the length header and then exactly that many bytes into `destination`.
pub async fn receive_file<R, D>(reader: &mut R, destination: &mut D) -> Result<u64, CodecError>
where
    R: AsyncRead + Unpin,
    D: AsyncWrite + Unpin,
{
    let mut header = [0u8; FILE_LENGTH_SIZE];
    reader.read_exact(&mut header).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::UnexpectedEof => CodecError::UnexpectedEof,
        _ => CodecError::Io(e),
    })?;
    let length = decode_file_length(&header)?;

    let mut buffer = [0u8; CHUNK_SIZE];
    let mut remaining = length;
    while remaining > 0 {
        let wanted = remaining.min(CHUNK_SIZE as u64) as usize;
        let read = reader.read(&mut buffer[..wanted]).await?;
        if read == 0 {
            return Err(CodecError::UnexpectedEof);
        }
        destination.write_all(&buffer[..read]).await?;
        remaining -= read as u64;
    }
    destination.flush().await?;
    Ok(length)
}
