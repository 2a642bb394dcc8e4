use std::collections::BTreeSet;
use crate::codec::codec::split_command;
use crate::tracker::enums::command::Command;

const REGISTER_FILE_OFFSET: usize = 3;
const UNREGISTER_FILE_OFFSET: usize = 2;

fn collect_files(words: &[&str], offset: usize) -> BTreeSet<String>
{
    words[offset..].iter().map(|word| word.to_string()).collect()
}

impl Command {
    /// Parses one command line. Lines whose prefix is unknown, or which carry
    /// fewer arguments than the command needs, become [`Command::Unknown`].
    pub fn parse(line: &str) -> Command
    {
        let words = split_command(line);
        let Some((prefix, arguments)) = words.split_first() else {
            return Command::Unknown;
        };

        match (*prefix, arguments.len()) {
            ("connect", n) if n >= 1 => Command::Connect {
                username: words[1].to_string(),
            },
            ("register", n) if n >= 3 => Command::Register {
                port: words[1].parse::<u16>().ok(),
                username: words[2].to_string(),
                files: collect_files(&words, REGISTER_FILE_OFFSET),
            },
            ("unregister", n) if n >= 2 => Command::Unregister {
                username: words[1].to_string(),
                files: collect_files(&words, UNREGISTER_FILE_OFFSET),
            },
            ("list-files", _) => Command::ListFiles,
            ("list-addresses", _) => Command::ListAddresses,
            ("download", n) if n >= 2 => Command::Download {
                username: words[1].to_string(),
                path: words[2].to_string(),
            },
            ("disconnect", _) => Command::Disconnect,
            _ => Command::Unknown,
        }
    }
}
