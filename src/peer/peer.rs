use crate::codec::codec::split_command;

pub const REPLY_DOWNLOAD_QUEUED: &str = "Download request sent!";
pub const REPLY_STOPPED: &str = "Disconnected from the tracker!";
pub const REPLY_STOP_FAILED: &str = "Disconnecting from the tracker failed!";

/// `register <file>+` becomes `register <port> <username> <file>+`.
pub fn rewrite_register(command: &str, port: u16, username: &str) -> String
{
    with_arguments(format!("register {port} {username}"), command)
}

/// `unregister <file>+` becomes `unregister <username> <file>+`.
pub fn rewrite_unregister(command: &str, username: &str) -> String
{
    with_arguments(format!("unregister {username}"), command)
}

/// Prefix used to announce a finished download: `register <port> <username>`.
pub fn announce_prefix(port: u16, username: &str) -> String
{
    format!("register {port} {username}")
}

fn with_arguments(mut rewritten: String, command: &str) -> String
{
    for argument in split_command(command).iter().skip(1) {
        rewritten.push(' ');
        rewritten.push_str(argument);
    }
    rewritten
}
