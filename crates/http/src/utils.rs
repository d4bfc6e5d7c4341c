//! Small helpers shared by the parsers.

/// Line terminator of the request line and of every header line.
pub(crate) const CRLF: &[u8] = b"\r\n";

/// Returns the offset of the first CRLF in `data`. A lone LF is not a terminator.
pub(crate) fn find_crlf(data: &[u8]) -> Option<usize> {
    data.windows(CRLF.len()).position(|window| window == CRLF)
}

/// Returns early with an error if a condition is not met.
///
/// Like `assert!`, but returns `Err($error)` instead of panicking.
///
/// ```ignore
/// ensure!(target.starts_with('/'), ParseError::invalid_target(target));
/// ```
macro_rules! ensure {
    ($predicate:expr, $error:expr) => {
        if !$predicate {
            return Err($error);
        }
    };
}

pub(crate) use ensure;
