//! Echo handler over async reader/writer pairs.

use bytes::{BufMut, BytesMut};
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error};

use crate::protocols::{read_request, HandlerError};

/// Echo every line of `reader` to `writer`.
///
/// Lines are bytes, so non-UTF-8 input passes through unchanged.
pub async fn handle<R, W>(reader: R, mut writer: W, max_request_size: usize) -> Result<(), HandlerError>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let input = match read_request(reader, max_request_size).await {
        Ok(input) => input,
        Err(e) => {
            error!(error = %e, "Unable to read standard input");
            return Err(e);
        }
    };

    let mut output = BytesMut::with_capacity(input.len() + 1);
    let mut count = 0;
    for line in lines(&input) {
        output.put_slice(line);
        output.put_u8(b'\n');
        count += 1;
    }

    debug!(lines = count, bytes = output.len(), "Echoing input");

    writer.write_all(&output).await?;
    writer.flush().await?;

    Ok(())
}

/// Split `input` into lines ended by `\n`, `\r\n` or a lone `\r`.
///
/// A trailing terminator does not start an extra empty line.
fn lines(input: &[u8]) -> impl Iterator<Item = &[u8]> {
    let mut rest = input;

    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }

        let line = match rest.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(end) => {
                let terminator = match &rest[end..] {
                    [b'\r', b'\n', ..] => 2,
                    _ => 1,
                };
                let line = &rest[..end];
                rest = &rest[end + terminator..];
                line
            }
            None => std::mem::take(&mut rest),
        };

        Some(line)
    })
}
