//! Echo function handler.
//!
//! The generic scaffold for a stdin/stdout function:
//! - Reads every line from stdin until EOF
//! - Writes each line back to stdout, terminated by `\n`
//!
//! ## Use Cases
//!
//! 1. **Smoke testing**: Verify the function plumbing delivers the request
//!    body intact before wiring in a real handler.
//!
//! 2. **Line normalization**: `\r\n` terminators are rewritten as `\n`,
//!    and a final unterminated line gains its newline.
//!
//! ## Format
//!
//! ```text
//! Input:  first\r\nsecond
//! Output: first\nsecond\n
//! ```
//!
//! A read error aborts the handler before anything is written.

pub mod handler;

pub use handler::handle;
