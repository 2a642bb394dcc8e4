#[cfg(test)]
mod address_tests {
    mod lookup_tests {
        use crate::address::impls::address_cache::find_address;

        #[test]
        fn test_find_address() {
            let store = "alice - 127.0.0.1:9000\nbob - [::1]:9001\n";
            assert_eq!(find_address(store, "alice"), Some("127.0.0.1:9000".to_string()));
            assert_eq!(find_address(store, "bob"), Some("[::1]:9001".to_string()));
            assert_eq!(find_address(store, "carol"), None);
        }

        #[test]
        fn test_find_address_needs_exact_username() {
            let store = "alice2 - 127.0.0.1:9000\n";
            assert_eq!(find_address(store, "alice"), None);
        }

        #[test]
        fn test_find_address_ignores_messages() {
            assert_eq!(find_address("There are no addresses available!", "There"), None);
        }
    }

    mod cache_tests {
        use std::sync::Arc;
        use std::time::Duration;
        use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
        use tokio::net::TcpListener;
        use crate::address::address::address_refresh_service;
        use crate::address::enums::address_error::AddressError;
        use crate::address::structs::address_cache::AddressCache;
        use crate::connection::structs::tracker_connection::TrackerConnection;

        /// Replies to every `list-addresses` with a fixed table.
        async fn address_tracker() -> Arc<TrackerConnection> {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let address = listener.local_addr().unwrap().to_string();
            tokio::spawn(async move {
                let (stream, _) = listener.accept().await.unwrap();
                let (reader, mut writer) = stream.into_split();
                let mut lines = BufReader::new(reader).lines();
                while let Ok(Some(_)) = lines.next_line().await {
                    let reply = "2\nalice - 127.0.0.1:9000\nbob - 127.0.0.1:9001\n";
                    if writer.write_all(reply.as_bytes()).await.is_err() {
                        break;
                    }
                }
            });
            let connection = Arc::new(TrackerConnection::new(&address));
            connection.connect().await.unwrap();
            connection
        }

        #[tokio::test]
        async fn test_lookup_before_refresh() {
            let directory = tempfile::tempdir().unwrap();
            let connection = Arc::new(TrackerConnection::new("127.0.0.1:1"));
            let cache = AddressCache::new(directory.path().join("addresses.txt"), connection);
            assert!(matches!(cache.address_of("alice").await, Err(AddressError::UserNotFound)));
        }

        #[tokio::test]
        async fn test_refresh_rewrites_store() {
            let directory = tempfile::tempdir().unwrap();
            let path = directory.path().join("cache").join("addresses.txt");
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(&path, "stale - 10.0.0.1:1\n").unwrap();

            let cache = AddressCache::new(path.clone(), address_tracker().await);
            cache.refresh().await.unwrap();

            assert_eq!(std::fs::read_to_string(&path).unwrap(), "alice - 127.0.0.1:9000\nbob - 127.0.0.1:9001");
            assert_eq!(cache.address_of("bob").await.unwrap(), "127.0.0.1:9001");
            assert!(matches!(cache.address_of("stale").await, Err(AddressError::UserNotFound)));
        }

        #[tokio::test]
        async fn test_refresh_without_tracker_fails() {
            let directory = tempfile::tempdir().unwrap();
            let connection = Arc::new(TrackerConnection::new("127.0.0.1:1"));
            let cache = AddressCache::new(directory.path().join("addresses.txt"), connection);
            assert!(matches!(cache.refresh().await, Err(AddressError::Connection(_))));
        }

        #[tokio::test]
        async fn test_refresh_service_stops_on_shutdown() {
            let directory = tempfile::tempdir().unwrap();
            let path = directory.path().join("addresses.txt");
            let cache = Arc::new(AddressCache::new(path.clone(), address_tracker().await));

            let (tx, rx) = tokio::sync::watch::channel(false);
            let handle = address_refresh_service(cache.clone(), Duration::from_secs(30), rx);

            for _ in 0..50 {
                if path.exists() {
                    break;
                }
                tokio::time::sleep(Duration::from_millis(20)).await;
            }
            assert_eq!(cache.address_of("alice").await.unwrap(), "127.0.0.1:9000");

            tx.send(true).unwrap();
            tokio::time::timeout(Duration::from_secs(5), handle).await.unwrap().unwrap();
        }

        #[tokio::test]
        async fn test_refresh_service_stops_on_failure() {
            let directory = tempfile::tempdir().unwrap();
            let connection = Arc::new(TrackerConnection::new("127.0.0.1:1"));
            let cache = Arc::new(AddressCache::new(directory.path().join("addresses.txt"), connection));

            let (_tx, rx) = tokio::sync::watch::channel(false);
            let handle = address_refresh_service(cache, Duration::from_secs(30), rx);
            tokio::time::timeout(Duration::from_secs(5), handle).await.unwrap().unwrap();
        }
    }
}
