use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Create the config file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,
    #[command(subcommand)]
    pub mode: Mode,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Run the tracker.
    Tracker,
    /// Run a peer.
    Peer {
        /// Username to claim on the tracker.
        #[arg(long)]
        username: String,
        /// Port the file server listens on and announces.
        #[arg(long)]
        port: u16,
    },
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use super::*;

    #[test]
    fn test_parse_tracker_mode() {
        let cli = Cli::parse_from(["peer-tracker", "tracker"]);
        assert_eq!(cli.config, "config.toml");
        assert!(!cli.create_config);
        assert_eq!(cli.mode, Mode::Tracker);
    }

    #[test]
    fn test_parse_peer_mode() {
        let cli = Cli::parse_from(["peer-tracker", "--config", "peer.toml", "peer", "--username", "alice", "--port", "9000"]);
        assert_eq!(cli.config, "peer.toml");
        assert_eq!(cli.mode, Mode::Peer { username: "alice".to_string(), port: 9000 });
    }

    #[test]
    fn test_peer_mode_requires_port() {
        assert!(Cli::try_parse_from(["peer-tracker", "peer", "--username", "alice"]).is_err());
    }
}
