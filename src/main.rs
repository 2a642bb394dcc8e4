use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{error, info, warn};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use peer_tracker::common::common::setup_logging;
use peer_tracker::config::structs::configuration::Configuration;
use peer_tracker::connection::structs::tracker_connection::TrackerConnection;
use peer_tracker::peer::structs::peer_client::PeerClient;
use peer_tracker::structs::{Cli, Mode};
use peer_tracker::tracker::tracker::tracker_service;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("[ERROR] {error}");
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    match args.mode {
        Mode::Tracker => run_tracker(config),
        Mode::Peer { username, port } => run_peer(config, username, port),
    }
}

fn run_tracker(config: Arc<Configuration>) -> std::io::Result<()>
{
    Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let tokio_shutdown = Shutdown::new().expect("shutdown creation works on first call");
            let (tracker_tx, tracker_rx) = tokio::sync::watch::channel(false);

            let (address, handle) = tracker_service(&config.tracker.bind_address, tracker_rx).await?;
            info!("[BOOT] Tracker ready on {address}");

            tokio_shutdown.handle().await;
            info!("Shutdown request received, shutting down...");

            let _ = tracker_tx.send(true);
            if let Err(error) = handle.await {
                error!("Errors happened on shutting down the tracker: {error}");
            }
            info!("Server shutting down completed");
            Ok(())
        })
}

fn print_help()
{
    println!("\nAvailable Commands:");
    println!("1. 'register <file1> <file2> ... <fileN>' - announce files for download.");
    println!("2. 'unregister <file1> <file2> ... <fileN>' - declare files that can't be downloaded.");
    println!("3. 'list-files' - view available files and the users from which they can be downloaded.");
    println!("4. 'download <user> <path to file on user> [<path to save>]' - download a file from <user>.");
    println!("5. 'disconnect' - disconnect from the tracker.");
}

fn run_peer(config: Arc<Configuration>, username: String, port: u16) -> std::io::Result<()>
{
    let runtime = Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(async {
        let connection = Arc::new(TrackerConnection::new(&config.peer.tracker_address));
        if let Err(error) = connection.connect().await {
            println!("Unable to connect to the tracker: {error}");
            return Ok(());
        }

        match PeerClient::claim_username(&connection, &username).await {
            Ok(true) => {}
            Ok(false) => {
                println!("The username {username} is already taken. Please try another one.");
                return Ok(());
            }
            Err(error) => {
                println!("Unable to claim the username: {error}");
                return Ok(());
            }
        }

        let client = PeerClient::start(&username, &format!("0.0.0.0:{port}"), &config.peer, connection).await?;
        println!("Connected to the tracker!");
        print_help();

        let tokio_shutdown = Shutdown::new().expect("shutdown creation works on first call");
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            tokio::select! {
                line = lines.next_line() => {
                    match line {
                        Ok(Some(line)) => {
                            let outcome = client.handle_line(&line).await;
                            println!("{}", outcome.output);
                            if !outcome.keep_running {
                                break;
                            }
                        }
                        Ok(None) => {
                            println!("{}", client.stop().await);
                            break;
                        }
                        Err(error) => {
                            warn!("[PEER] Reading input failed: {error}");
                            println!("{}", client.stop().await);
                            break;
                        }
                    }
                }
                _ = tokio_shutdown.handle() => {
                    info!("Shutdown request received, shutting down...");
                    println!("{}", client.stop().await);
                    break;
                }
            }
        }
        Ok(())
    });

    runtime.shutdown_timeout(Duration::from_secs(1));
    result
}
