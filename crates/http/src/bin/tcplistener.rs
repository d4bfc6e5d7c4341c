//! Accepts TCP connections and prints the request head received on each one.

use std::env;
use std::fmt::Write;

use httpfromtcp::connection::request_from_async_reader;
use httpfromtcp::protocol::Request;
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

        info!(%remote_addr, "connection accepted");
        tokio::spawn(async move {
            match request_from_async_reader(tcp_stream).await {
                Ok(request) => print!("{}", render(&request)),
                Err(e) => warn!(%remote_addr, cause = %e, "can't parse request, dropping connection"),
            }
            info!(%remote_addr, "connection closed");
        });
    }
}

fn render(request: &Request) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Request line:");
    let _ = writeln!(out, "- Method: {}", request.method());
    let _ = writeln!(out, "- Target: {}", request.target());
    let _ = writeln!(out, "- Version: {}", request.version());
    let _ = writeln!(out, "Headers:");

    let mut headers: Vec<_> = request.headers().iter().collect();
    headers.sort_unstable();
    for (name, value) in headers {
        let _ = writeln!(out, "- {name}: {value}");
    }
    out
}
