#[cfg(test)]
mod connection_tests {
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
    use tokio::net::TcpListener;
    use crate::connection::enums::connection_error::ConnectionError;
    use crate::connection::structs::tracker_connection::TrackerConnection;

    /// Answers every line with a two-line envelope echoing it back.
    async fn echo_tracker() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap().to_string();
        tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            let (reader, mut writer) = stream.into_split();
            let mut lines = BufReader::new(reader).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                let reply = format!("2\necho\n{line}\n");
                if writer.write_all(reply.as_bytes()).await.is_err() {
                    break;
                }
            }
        });
        address
    }

    #[tokio::test]
    async fn test_send_before_connect() {
        let connection = TrackerConnection::new("127.0.0.1:1");
        assert!(!connection.is_connected().await);
        assert!(matches!(connection.send_message("list-files").await, Err(ConnectionError::NotConnected)));
    }

    #[tokio::test]
    async fn test_send_message_joins_body() {
        let connection = TrackerConnection::new(&echo_tracker().await);
        connection.connect().await.unwrap();
        assert!(connection.is_connected().await);
        assert_eq!(connection.send_message("list-files").await.unwrap(), "echo\nlist-files");
        connection.close().await.unwrap();
        assert!(matches!(connection.send_message("list-files").await, Err(ConnectionError::NotConnected)));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_callers_get_their_own_reply() {
        let connection = Arc::new(TrackerConnection::new(&echo_tracker().await));
        connection.connect().await.unwrap();

        let mut handles = Vec::new();
        for i in 0..16 {
            let connection = connection.clone();
            handles.push(tokio::spawn(async move {
                let command = format!("connect user{i}");
                let reply = connection.send_message(&command).await.unwrap();
                assert_eq!(reply, format!("echo\n{command}"));
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_transport_failure_drops_link() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap().to_string();
        tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            drop(stream);
        });

        let connection = TrackerConnection::new(&address);
        connection.connect().await.unwrap();
        assert!(connection.send_message("list-files").await.is_err());
        assert!(!connection.is_connected().await);
        assert!(matches!(connection.send_message("list-files").await, Err(ConnectionError::NotConnected)));
    }

    #[tokio::test]
    async fn test_connect_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap().to_string();
        drop(listener);

        let connection = TrackerConnection::new(&address);
        assert!(matches!(connection.connect().await, Err(ConnectionError::Io(_))));
    }

    #[tokio::test]
    async fn test_abandoned_send_closes_the_link() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap().to_string();
        tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            let (reader, mut writer) = stream.into_split();
            let mut lines = BufReader::new(reader).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                tokio::time::sleep(Duration::from_millis(500)).await;
                let reply = format!("1\nreply to {line}\n");
                if writer.write_all(reply.as_bytes()).await.is_err() {
                    break;
                }
            }
        });

        let connection = Arc::new(TrackerConnection::new(&address));
        connection.connect().await.unwrap();

        let pending = {
            let connection = connection.clone();
            tokio::spawn(async move { connection.send_message("register 9000 bob x").await })
        };
        tokio::time::sleep(Duration::from_millis(50)).await;
        pending.abort();
        assert!(pending.await.unwrap_err().is_cancelled());

        assert!(!connection.is_connected().await);
        assert!(matches!(connection.send_message("disconnect").await, Err(ConnectionError::NotConnected)));
    }
}
