use std::fs::File;
use std::io::Write;
use regex::Regex;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::peer_config::PeerConfig;
use crate::config::structs::tracker_config::TrackerConfig;
use crate::transfer::transfer::{DEFAULT_SHUTDOWN_GRACE, DEFAULT_WORKERS};

const ADDRESS_REGEX: &str = r"^(\[[0-9A-Fa-f:.]+\]|[A-Za-z0-9.\-]+):[0-9]{1,5}$";
const LOG_LEVEL_REGEX: &str = r"^(off|trace|debug|info|warn|error)$";

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            tracker: TrackerConfig {
                bind_address: String::from("127.0.0.1:5555"),
            },
            peer: PeerConfig {
                tracker_address: String::from("127.0.0.1:5555"),
                address_file: String::from("addresses.txt"),
                download_dir: String::from("downloads"),
                workers: DEFAULT_WORKERS,
                address_refresh_interval: 30,
                shutdown_grace: DEFAULT_SHUTDOWN_GRACE,
            },
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path).map_err(|source| ConfigurationError::Read { path: path.to_string(), source })?;
        Self::load(data.as_slice()).map_err(|source| ConfigurationError::Parse { path: path.to_string(), source })
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let write_error = |source| ConfigurationError::Write { path: path.to_string(), source };
        let mut file = File::create(path).map_err(write_error)?;
        file.write_all(data.as_ref()).map_err(write_error)
    }

    /// Loads and validates `path`. A missing or broken file is replaced by the
    /// defaults when `create` is set; the call still fails so the file can be
    /// reviewed before the next start.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new(&format!("will not create automatically {path} file")));
                }
                eprintln!("Creating config file..");

                let config_toml = toml::to_string(&Configuration::init())
                    .map_err(|e| CustomError::new(&format!("could not serialize the default configuration: {e}")))?;
                return match Configuration::save_file(path, config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit {path} and start again, exiting now...");
                        Err(CustomError::new(&format!("created {path} file")))
                    }
                    Err(e) => {
                        eprintln!("{path} file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {path} file")))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CustomError> {
        let check_map = [
            ("[LOG] Level", self.log_level.as_str(), LOG_LEVEL_REGEX),
            ("[TRACKER] Bind address", self.tracker.bind_address.as_str(), ADDRESS_REGEX),
            ("[PEER] Tracker address", self.peer.tracker_address.as_str(), ADDRESS_REGEX),
        ];
        for (name, value, regex) in check_map {
            Self::validate_value(name, value, regex)?;
        }

        if self.peer.address_file.trim().is_empty() {
            return Err(CustomError::new("[VALIDATE CONFIG] Error checking [PEER] Address file [:] must not be empty"));
        }
        if self.peer.download_dir.trim().is_empty() {
            return Err(CustomError::new("[VALIDATE CONFIG] Error checking [PEER] Download dir [:] must not be empty"));
        }
        let numbers = [
            ("[PEER] Workers", self.peer.workers as u64),
            ("[PEER] Address refresh interval", self.peer.address_refresh_interval),
            ("[PEER] Shutdown grace", self.peer.shutdown_grace),
        ];
        for (name, value) in numbers {
            if value == 0 {
                return Err(CustomError::new(&format!("[VALIDATE CONFIG] Error checking {name} [:] must be greater than zero")));
            }
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), CustomError>
    {
        let regex_check = Regex::new(regex).map_err(|e| CustomError::new(&e.to_string()))?;
        if !regex_check.is_match(value) {
            return Err(CustomError::new(&format!("[VALIDATE CONFIG] Error checking {name} [:] Name: \"{value}\" [:] Regex: \"{regex_check}\"")));
        }
        Ok(())
    }
}
