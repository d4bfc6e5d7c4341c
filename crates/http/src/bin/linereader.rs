//! Accepts TCP connections and prints every line received, without any HTTP parsing.

use std::env;

use httpfromtcp::connection::spawn_line_reader;
use tokio::net::TcpListener;
use tracing::{Level, error, info, warn};
use tracing_subscriber::FmtSubscriber;

const DEFAULT_ADDR: &str = "0.0.0.0:42069";

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let addr = env::args().nth(1).unwrap_or_else(|| DEFAULT_ADDR.to_string());

    info!(%addr, "start listening");
    let tcp_listener = match TcpListener::bind(&addr).await {
        Ok(tcp_listener) => tcp_listener,
        Err(e) => {
            error!(cause = %e, "bind server error");
            return;
        }
    };

    loop {
        let (tcp_stream, remote_addr) = match tcp_listener.accept().await {
            Ok(stream_and_addr) => stream_and_addr,
            Err(e) => {
                warn!(cause = %e, "failed to accept");
                continue;
            }
        };

        tokio::spawn(async move {
            println!("========Connection accepted========");
            info!(%remote_addr, "connection accepted");

            let mut lines = spawn_line_reader(tcp_stream);
            while let Some(line) = lines.recv().await {
                println!("{line}");
            }

            println!("=======Connection terminated=======");
        });
    }
}
