//! Search function handler.
//!
//! Exposes binary search over the stdin/stdout function contract:
//! - Client sends: a sorted sequence and a target
//! - Handler responds: the target's index, or `-1` when absent
//!
//! ## Body Formats
//!
//! ```text
//! Text request:  1 3 5 7 9 11\n7\n
//! Text response: 3\n
//!
//! JSON request:  {"sequence": [1, 3, 5, 7, 9, 11], "target": 2}
//! JSON response: {"index":-1}\n
//! ```
//!
//! An absent target is a normal response, not an error. Malformed requests
//! fail the handler without writing a response.

pub mod handler;
pub mod parser;

pub use handler::handle;
