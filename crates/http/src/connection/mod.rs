//! Reading request heads from byte streams
//!
//! This is the only part of the crate performing I/O.
//!
//! # Components
//!
//! - [`request_from_reader`] / [`request_from_async_reader`]: the stream consumption
//!   loop, reading into a [`RequestBuffer`] and feeding the request parser until the
//!   header section is complete
//! - [`RequestBuffer`]: growable buffer separating pending bytes from free space
//! - [`spawn_line_reader`]: splits a stream into `\n` separated lines, no HTTP parsing
//!
//! Each call owns its buffer and parser, so any number of connections can be read
//! concurrently, one task or thread each.

mod line_reader;
mod request_buffer;
mod request_reader;

pub use line_reader::spawn_line_reader;
pub use request_buffer::RequestBuffer;
pub use request_reader::request_from_async_reader;
pub use request_reader::request_from_async_reader_with_config;
pub use request_reader::request_from_reader;
pub use request_reader::request_from_reader_with_config;
