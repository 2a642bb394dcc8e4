#[cfg(test)]
mod config_tests {
    mod configuration_tests {
        use crate::config::structs::configuration::Configuration;

        #[test]
        fn test_defaults() {
            let config = Configuration::init();
            assert_eq!(config.log_level, "info");
            assert_eq!(config.tracker.bind_address, "127.0.0.1:5555");
            assert_eq!(config.peer.tracker_address, "127.0.0.1:5555");
            assert_eq!(config.peer.workers, 5);
            assert_eq!(config.peer.address_refresh_interval, 30);
            assert_eq!(config.peer.shutdown_grace, 10);
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_toml_round_trip() {
            let config = Configuration::init();
            let serialized = toml::to_string(&config).unwrap();
            assert!(serialized.contains("[tracker]"));
            assert!(serialized.contains("[peer]"));
            let loaded = Configuration::load(serialized.as_bytes()).unwrap();
            assert_eq!(loaded, config);
        }

        #[test]
        fn test_load_rejects_missing_section() {
            assert!(Configuration::load(b"log_level = \"info\"\n").is_err());
        }

        #[test]
        fn test_validate_rejects_bad_values() {
            let mut config = Configuration::init();
            config.log_level = "loud".to_string();
            assert!(config.validate().is_err());

            let mut config = Configuration::init();
            config.tracker.bind_address = "localhost".to_string();
            assert!(config.validate().is_err());

            let mut config = Configuration::init();
            config.peer.workers = 0;
            assert!(config.validate().is_err());

            let mut config = Configuration::init();
            config.peer.tracker_address = "[::1]:5555".to_string();
            assert!(config.validate().is_ok());
        }
    }

    mod configuration_error_tests {
        use crate::config::enums::configuration_error::ConfigurationError;
        use crate::config::structs::configuration::Configuration;

        #[test]
        fn test_read_error_names_the_path() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("absent.toml");
            let path = path.to_str().unwrap();

            let error = Configuration::load_file(path).unwrap_err();
            assert!(matches!(error, ConfigurationError::Read { .. }));
            assert!(error.to_string().starts_with(&format!("Could not read {path}: ")));
        }

        #[test]
        fn test_parse_error_names_the_path() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("broken.toml");
            std::fs::write(&path, "log_level = [").unwrap();
            let path = path.to_str().unwrap();

            let error = Configuration::load_file(path).unwrap_err();
            assert!(matches!(error, ConfigurationError::Parse { .. }));
            assert!(error.to_string().starts_with(&format!("Could not parse {path}: ")));
        }

        #[test]
        fn test_write_error_names_the_path() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("missing").join("config.toml");
            let path = path.to_str().unwrap();

            let error = Configuration::save_file(path, String::new()).unwrap_err();
            assert!(matches!(error, ConfigurationError::Write { .. }));
            assert!(error.to_string().starts_with(&format!("Could not write {path}: ")));
        }
    }
}
