//! Sends each line typed on stdin as one UDP datagram.

use std::env;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::UdpSocket;
use tracing::{Level, error, info, warn};
use tracing_subscriber::FmtSubscriber;

const DEFAULT_TARGET: &str = "localhost:42069";

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let target = env::args().nth(1).unwrap_or_else(|| DEFAULT_TARGET.to_string());

    let socket = match UdpSocket::bind("0.0.0.0:0").await {
        Ok(socket) => socket,
        Err(e) => {
            error!(cause = %e, "bind udp socket error");
            return;
        }
    };
    if let Err(e) = socket.connect(&target).await {
        error!(%target, cause = %e, "can't resolve target");
        return;
    }
    info!(%target, "sending stdin lines");

    let mut stdin = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        if let Err(e) = prompt(&mut stdout).await {
            warn!(cause = %e, "can't write prompt");
        }

        let line = match stdin.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                error!(cause = %e, "can't read stdin");
                break;
            }
        };

        if let Err(e) = socket.send(format!("{line}\n").as_bytes()).await {
            warn!(cause = %e, "can't send line");
        }
    }
}

async fn prompt(stdout: &mut tokio::io::Stdout) -> std::io::Result<()> {
    stdout.write_all(b">").await?;
    stdout.flush().await
}
