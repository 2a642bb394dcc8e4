use serde::{Deserialize, Serialize};
use crate::config::structs::peer_config::PeerConfig;
use crate::config::structs::tracker_config::TrackerConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Configuration {
    pub log_level: String,
    pub tracker: TrackerConfig,
    pub peer: PeerConfig,
}
