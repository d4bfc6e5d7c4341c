use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::sync::mpsc;
use tracing::{trace, warn};

/// Bytes requested from the reader per read.
const READ_CHUNK_SIZE: usize = 8;

const LINE_CHANNEL_CAPACITY: usize = 16;

/// Spawns a task splitting `reader` into `\n` separated lines.
///
/// Lines are sent without their `\n` (a preceding `\r` is kept). A trailing line without
/// a terminator is sent when the stream ends. The channel closes on end-of-stream or on
/// the first read error.
pub fn spawn_line_reader<R>(reader: R) -> mpsc::Receiver<String>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let (sender, receiver) = mpsc::channel(LINE_CHANNEL_CAPACITY);
    tokio::spawn(read_lines(reader, sender));
    receiver
}

async fn read_lines<R: AsyncRead + Unpin>(mut reader: R, sender: mpsc::Sender<String>) {
    let mut chunk = [0; READ_CHUNK_SIZE];
    let mut current_line = Vec::new();

    loop {
        let read = match reader.read(&mut chunk).await {
            Ok(0) => break,
            Ok(read) => read,
            Err(e) => {
                warn!(cause = %e, "stop reading lines");
                break;
            }
        };

        let mut parts = chunk[..read].split(|b| *b == b'\n');
        let unfinished = parts.next_back().unwrap_or_default();

        for part in parts {
            current_line.extend_from_slice(part);
            let line = String::from_utf8_lossy(&current_line).into_owned();
            current_line.clear();

            if sender.send(line).await.is_err() {
                trace!("line receiver dropped");
                return;
            }
        }

        current_line.extend_from_slice(unfinished);
    }

    if !current_line.is_empty() && sender.send(String::from_utf8_lossy(&current_line).into_owned()).await.is_err() {
        trace!("line receiver dropped");
    }
}
