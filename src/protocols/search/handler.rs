//! Search handler over async reader/writer pairs.

use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, trace};

use super::parser;
use crate::protocols::{read_request, HandlerError, HandlerOptions};
use crate::search::{search, NOT_FOUND};

/// Read one search request from `reader` and write the result to `writer`.
pub async fn handle<R, W>(reader: R, mut writer: W, options: HandlerOptions) -> Result<(), HandlerError>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let input = read_request(reader, options.max_request_size)
        .await
        .inspect_err(|e| error!(error = %e, "Unable to read standard input"))?;

    let request = parser::parse(&input, options.format)
        .inspect_err(|e| error!(error = %e, format = ?options.format, "Rejected request"))?;

    trace!(?request, "Processing request");

    let result = search(&request.sequence, request.target);
    debug!(
        len = request.sequence.len(),
        target = request.target,
        found = result != NOT_FOUND,
        result,
        "Search complete"
    );

    writer.write_all(&parser::format(result, options.format)).await?;
    writer.flush().await?;

    Ok(())
}
