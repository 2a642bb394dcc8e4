use std::collections::BTreeSet;

#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Command {
    Connect {
        username: String,
    },
    Register {
        /// `None` when the port token is not a valid port number.
        port: Option<u16>,
        username: String,
        files: BTreeSet<String>,
    },
    Unregister {
        username: String,
        files: BTreeSet<String>,
    },
    ListFiles,
    ListAddresses,
    Download {
        username: String,
        path: String,
    },
    Disconnect,
    Unknown,
}
