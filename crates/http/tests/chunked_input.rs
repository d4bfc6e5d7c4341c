//! Parsing results must not depend on how the input is split into reads.

use std::collections::HashMap;
use std::io::{self, Read};

use httpfromtcp::codec::RequestParser;
use httpfromtcp::connection::request_from_reader;
use httpfromtcp::protocol::Request;
use proptest::prelude::*;

/// Delivers the input in reads whose sizes cycle through `sizes`.
struct ScriptedReader {
    data: Vec<u8>,
    sizes: Vec<usize>,
    pos: usize,
    reads: usize,
}

impl ScriptedReader {
    fn new(data: Vec<u8>, sizes: Vec<usize>) -> Self {
        Self { data, sizes, pos: 0, reads: 0 }
    }
}

impl Read for ScriptedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let size = self.sizes[self.reads % self.sizes.len()].min(buf.len());
        self.reads += 1;

        let end = (self.pos + size).min(self.data.len());
        let read = end - self.pos;
        buf[..read].copy_from_slice(&self.data[self.pos..end]);
        self.pos = end;
        Ok(read)
    }
}

fn header_name() -> impl Strategy<Value = String> {
    "[A-Za-z0-9!#$%&'*+.^_`|~-]{1,12}"
}

fn header_value() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[!-~]", "[!-~][ -~]{0,18}[!-~]"]
}

fn request_text() -> impl Strategy<Value = (String, Vec<(String, String)>)> {
    let request_line = ("[A-Z]{1,7}", "/[a-zA-Z0-9/._?=&%-]{0,24}");
    let headers = prop::collection::vec((header_name(), header_value()), 0..8);

    (request_line, headers).prop_map(|((method, target), headers)| {
        let mut text = format!("{method} {target} HTTP/1.1\r\n");
        for (name, value) in &headers {
            text.push_str(&format!("{name}: {value}\r\n"));
        }
        text.push_str("\r\n");
        (text, headers)
    })
}

fn parse_whole(text: &str) -> Request {
    let mut parser = RequestParser::new();
    assert_eq!(parser.parse(text.as_bytes()).unwrap(), text.len());
    parser.into_request().unwrap()
}

proptest! {
    #[test]
    fn chunking_does_not_change_the_result(
        (text, _headers) in request_text(),
        sizes in prop::collection::vec(1usize..16, 1..8),
    ) {
        let whole = parse_whole(&text);
        let chunked = request_from_reader(ScriptedReader::new(text.clone().into_bytes(), sizes)).unwrap();

        prop_assert_eq!(whole, chunked);
    }

    #[test]
    fn one_byte_at_a_time((text, _headers) in request_text()) {
        let whole = parse_whole(&text);
        let chunked = request_from_reader(ScriptedReader::new(text.clone().into_bytes(), vec![1])).unwrap();

        prop_assert_eq!(whole, chunked);
    }

    #[test]
    fn parsed_values_revalidate((text, _headers) in request_text()) {
        let request = parse_whole(&text);

        prop_assert!(request.request_line().validate().is_ok());
        prop_assert!(request.headers().validate().is_ok());
    }

    #[test]
    fn repeated_headers_fold_in_arrival_order((text, headers) in request_text()) {
        let request = parse_whole(&text);

        let mut expected: HashMap<String, String> = HashMap::new();
        for (name, value) in headers {
            expected
                .entry(name.to_ascii_lowercase())
                .and_modify(|folded| {
                    folded.push_str(", ");
                    folded.push_str(&value);
                })
                .or_insert(value);
        }

        prop_assert_eq!(request.headers().len(), expected.len());
        for (name, value) in &expected {
            prop_assert_eq!(request.headers().get(name), Some(value.as_str()));
        }
    }
}
