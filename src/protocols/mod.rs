//! Function handler implementations.
//!
//! Each handler reads one request body from an async reader (stdin in
//! production) and writes one response body to an async writer (stdout).
//!
//! ## Handlers
//! - `echo`: Writes every input line back, newline terminated
//! - `search`: Binary search over a sorted sequence in the request

pub mod echo;
pub mod search;

use crate::config::{Config, HandlerMode};
use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};
use tracing::{debug, trace};

use self::search::parser::{BodyFormat, ParseError};

/// Read chunk size
const BUFFER_SIZE: usize = 8 * 1024;

/// Options shared by all handlers.
#[derive(Debug, Clone, Copy)]
pub struct HandlerOptions {
    /// Upper bound on the request body, in bytes.
    pub max_request_size: usize,
    /// Request/response body format (search only).
    pub format: BodyFormat,
}

impl From<&Config> for HandlerOptions {
    fn from(config: &Config) -> Self {
        HandlerOptions {
            max_request_size: config.max_request_size,
            format: if config.json {
                BodyFormat::Json
            } else {
                BodyFormat::Text
            },
        }
    }
}

/// Run the handler selected by `mode` over `reader` and `writer`.
pub async fn run<R, W>(
    mode: HandlerMode,
    options: HandlerOptions,
    reader: R,
    writer: W,
) -> Result<(), HandlerError>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    debug!(?mode, ?options, "Running handler");

    match mode {
        HandlerMode::Echo => echo::handle(reader, writer, options.max_request_size).await,
        HandlerMode::Search => search::handle(reader, writer, options).await,
    }
}

/// Read the whole request body until EOF.
///
/// Fails with [`HandlerError::TooLarge`] as soon as more than `max_size`
/// bytes have arrived.
pub(crate) async fn read_request<R>(mut reader: R, max_size: usize) -> Result<BytesMut, HandlerError>
where
    R: AsyncRead + Unpin,
{
    let mut buffer = BytesMut::with_capacity(BUFFER_SIZE.min(max_size.saturating_add(1)));

    loop {
        buffer.reserve(BUFFER_SIZE);
        let n = reader.read_buf(&mut buffer).await?;
        if n == 0 {
            // EOF
            trace!(bytes = buffer.len(), "Request read");
            return Ok(buffer);
        }

        if buffer.len() > max_size {
            return Err(HandlerError::TooLarge { limit: max_size });
        }
    }
}

/// Handler errors
#[derive(Debug)]
pub enum HandlerError {
    /// Reading the request or writing the response failed.
    Io(std::io::Error),
    /// The request body could not be parsed.
    Parse(ParseError),
    /// The request body exceeded the configured maximum size.
    TooLarge { limit: usize },
}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HandlerError::Io(e) => write!(f, "I/O error: {}", e),
            HandlerError::Parse(e) => write!(f, "Invalid request: {}", e),
            HandlerError::TooLarge { limit } => {
                write!(f, "Request exceeds maximum size of {} bytes", limit)
            }
        }
    }
}

impl std::error::Error for HandlerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HandlerError::Io(e) => Some(e),
            HandlerError::Parse(e) => Some(e),
            HandlerError::TooLarge { .. } => None,
        }
    }
}

impl From<std::io::Error> for HandlerError {
    fn from(e: std::io::Error) -> Self {
        HandlerError::Io(e)
    }
}

impl From<ParseError> for HandlerError {
    fn from(e: ParseError) -> Self {
        HandlerError::Parse(e)
    }
}
