mod common;

use std::sync::Arc;
use peer_tracker::connection::structs::tracker_connection::TrackerConnection;
use peer_tracker::peer::peer::{REPLY_DOWNLOAD_QUEUED, REPLY_STOPPED};
use peer_tracker::peer::structs::peer_client::PeerClient;
use peer_tracker::tracker::tracker::{REPLY_NO_ADDRESSES, REPLY_REGISTERED, REPLY_UNREGISTERED};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_peer_end_to_end_download() {
    let tracker = common::start_tracker().await;
    let alice_dir = tempfile::tempdir().unwrap();
    let bob_dir = tempfile::tempdir().unwrap();

    let photo = alice_dir.path().join("photo.jpg");
    let payload: Vec<u8> = (0..10_000u32).map(|i| (i * 31 % 256) as u8).collect();
    std::fs::write(&photo, &payload).unwrap();

    let alice = common::start_peer("alice", alice_dir.path(), tracker.address).await;
    let bob = common::start_peer("bob", bob_dir.path(), tracker.address).await;

    let register = alice.handle_line(&format!("register {}", photo.display())).await;
    assert_eq!(register.output, REPLY_REGISTERED);
    assert!(register.keep_running);

    let resolved = bob.server_command(&format!("download alice {}", photo.display())).await;
    assert_eq!(resolved, format!("download {} alice {}", alice.file_server_address(), photo.display()));

    bob.addresses().refresh().await.unwrap();
    let saved = bob_dir.path().join("saved");
    let queued = bob.handle_line(&format!("download alice {} {}", photo.display(), saved.display())).await;
    assert_eq!(queued.output, REPLY_DOWNLOAD_QUEUED);

    let local_path = saved.join("photo.jpg");
    let expected = format!("bob : {}", local_path.display());
    let files = common::wait_for_reply(tracker.address, "list-files", |reply| reply.lines.contains(&expected)).await;
    assert!(files.lines.contains(&format!("alice : {}", photo.display())));
    assert_eq!(std::fs::read(&local_path).unwrap(), payload);

    assert_eq!(alice.stop().await, REPLY_STOPPED);
    assert_eq!(bob.stop().await, REPLY_STOPPED);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_peer_disconnect_removes_user() {
    let tracker = common::start_tracker().await;
    let alice_dir = tempfile::tempdir().unwrap();
    let alice = common::start_peer("alice", alice_dir.path(), tracker.address).await;

    assert_eq!(alice.register("register a.txt b.txt").await, REPLY_REGISTERED);
    assert_eq!(alice.unregister("unregister a.txt").await, REPLY_UNREGISTERED);
    assert_eq!(alice.server_command("list-files").await, "alice : b.txt");

    let outcome = alice.handle_line("disconnect").await;
    assert_eq!(outcome.output, REPLY_STOPPED);
    assert!(!outcome.keep_running);

    let mut observer = common::TestClient::connect(tracker.address).await;
    assert_eq!(observer.send("list-addresses").await.body(), REPLY_NO_ADDRESSES);
}

#[tokio::test]
async fn test_peer_username_already_taken() {
    let tracker = common::start_tracker().await;
    let alice_dir = tempfile::tempdir().unwrap();
    let alice = common::start_peer("alice", alice_dir.path(), tracker.address).await;
    alice.register("register a.txt").await;

    let connection = Arc::new(TrackerConnection::new(&tracker.address.to_string()));
    connection.connect().await.unwrap();
    assert!(!PeerClient::claim_username(&connection, "alice").await.unwrap());
    assert!(PeerClient::claim_username(&connection, "bob").await.unwrap());
}

#[tokio::test]
async fn test_peer_download_failures_are_reported() {
    let tracker = common::start_tracker().await;
    let bob_dir = tempfile::tempdir().unwrap();
    let bob = common::start_peer("bob", bob_dir.path(), tracker.address).await;
    bob.addresses().refresh().await.unwrap();

    assert_eq!(bob.handle_line("download nobody /tmp/photo.jpg").await.output, "User not found!");
    assert_eq!(bob.handle_line("download nobody").await.output, "Unknown command!");
    assert_eq!(bob.handle_line("hello").await.output, "Unknown command!");
}
