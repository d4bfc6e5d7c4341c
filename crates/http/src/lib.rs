//! An incremental HTTP/1.1 request head parser
//!
//! This crate turns a byte stream, delivered in chunks of any size, into a parsed
//! request line and header section. The full request never has to be in memory at
//! once: the parser consumes complete lines and reports how many bytes it used, and
//! the caller keeps only the unconsumed remainder.
//!
//! # Example
//!
//! ```no_run
//! use httpfromtcp::connection::request_from_async_reader;
//! use tokio::net::TcpListener;
//! use tracing::{info, warn};
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:42069").await?;
//!
//!     loop {
//!         let (stream, _remote_addr) = listener.accept().await?;
//!
//!         tokio::spawn(async move {
//!             match request_from_async_reader(stream).await {
//!                 Ok(request) => info!(method = request.method(), target = request.target(), "received request"),
//!                 Err(e) => warn!(cause = %e, "can't parse request"),
//!             }
//!         });
//!     }
//! }
//! ```
//!
//! # Architecture
//!
//! - [`protocol`]: the parsed data model and [`ParseError`](protocol::ParseError)
//! - [`codec`]: request-line parser, header parser and the state machine driving them
//! - [`connection`]: the read loop feeding the state machine from a byte source
//! - [`config`]: buffer sizing
//!
//! # Wire format
//!
//! ```text
//! <METHOD> SP <TARGET> SP HTTP/1.1 CRLF
//! <name>:<OWS><value><OWS> CRLF      (zero or more)
//! CRLF
//! ```
//!
//! - the method is one or more uppercase ASCII letters and the target starts with `/`
//! - only `HTTP/1.1` is accepted
//! - no whitespace is allowed between a field name and its colon
//! - lines end with exactly CR LF; a lone LF is not a terminator
//!
//! # Limitations
//!
//! - message bodies are not parsed
//! - obsolete header line folding is not supported
//! - header names are stored lower-cased; repeated fields are joined with `", "`

pub mod codec;
pub mod config;
pub mod connection;
pub mod protocol;

mod utils;
pub(crate) use utils::ensure;
