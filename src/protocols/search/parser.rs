//! Search request parser and response formatter.

use bytes::Bytes;
use serde::Deserialize;

/// Request/response body format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFormat {
    /// Sequence lines followed by a target line.
    Text,
    /// `{"sequence": [..], "target": n}`
    Json,
}

/// Parsed search request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Request {
    /// Ascending sorted sequence to search.
    #[serde(default)]
    pub sequence: Vec<i64>,
    /// Value to locate.
    pub target: i64,
}

/// Request parse errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No target line in the request.
    Empty,
    /// Text request is not valid UTF-8.
    InvalidUtf8,
    /// A token is not a 64-bit integer.
    InvalidInteger(String),
    /// JSON request is malformed.
    Json(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Empty => write!(f, "request has no target"),
            ParseError::InvalidUtf8 => write!(f, "request is not valid UTF-8"),
            ParseError::InvalidInteger(token) => write!(f, "invalid integer '{}'", token),
            ParseError::Json(msg) => write!(f, "malformed JSON: {}", msg),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a request in the given body format.
pub fn parse(input: &[u8], format: BodyFormat) -> Result<Request, ParseError> {
    match format {
        BodyFormat::Text => parse_text(input),
        BodyFormat::Json => parse_json(input),
    }
}

/// Parse a plain-text request.
///
/// The last non-blank line holds the target; every line before it is part
/// of the sequence. Sequence values are separated by whitespace or commas,
/// optionally wrapped in `[` `]`.
///
/// ```text
/// 1, 3, 5, 7, 9, 11
/// 7
/// ```
pub fn parse_text(input: &[u8]) -> Result<Request, ParseError> {
    let text = std::str::from_utf8(input).map_err(|_| ParseError::InvalidUtf8)?;

    let mut lines: Vec<&str> = text.lines().map(str::trim).collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    let target = match lines.pop() {
        Some(line) => parse_integer(line)?,
        None => return Err(ParseError::Empty),
    };

    let mut sequence = Vec::new();
    for line in lines {
        for token in line
            .split(|c: char| c.is_whitespace() || matches!(c, ',' | '[' | ']'))
            .filter(|token| !token.is_empty())
        {
            sequence.push(parse_integer(token)?);
        }
    }

    Ok(Request { sequence, target })
}

/// Parse a JSON request.
pub fn parse_json(input: &[u8]) -> Result<Request, ParseError> {
    serde_json::from_slice(input).map_err(|e| ParseError::Json(e.to_string()))
}

/// Format a search result in the given body format.
pub fn format(result: i64, format: BodyFormat) -> Bytes {
    match format {
        BodyFormat::Text => format_text(result),
        BodyFormat::Json => format_json(result),
    }
}

/// Format a plain-text response: the index or `-1`, newline terminated.
pub fn format_text(result: i64) -> Bytes {
    Bytes::from(format!("{result}\n"))
}

/// Format a JSON response: `{"index":<result>}`, newline terminated.
pub fn format_json(result: i64) -> Bytes {
    let body = serde_json::json!({ "index": result }).to_string();
    Bytes::from(format!("{body}\n"))
}

fn parse_integer(token: &str) -> Result<i64, ParseError> {
    token
        .parse()
        .map_err(|_| ParseError::InvalidInteger(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text() {
        let request = parse_text(b"1 3 5 7 9 11\n7\n").unwrap();
        assert_eq!(request.sequence, vec![1, 3, 5, 7, 9, 11]);
        assert_eq!(request.target, 7);
    }

    #[test]
    fn test_parse_text_commas_and_brackets() {
        let request = parse_text(b"[1, 3,5]\r\n  -2 \r\n").unwrap();
        assert_eq!(request.sequence, vec![1, 3, 5]);
        assert_eq!(request.target, -2);
    }

    #[test]
    fn test_parse_text_multiline_sequence() {
        let request = parse_text(b"1 2\n\n3 4\n4\n\n\n").unwrap();
        assert_eq!(request.sequence, vec![1, 2, 3, 4]);
        assert_eq!(request.target, 4);
    }

    #[test]
    fn test_parse_text_empty_sequence() {
        assert_eq!(parse_text(b"5").unwrap().sequence, Vec::<i64>::new());
        assert_eq!(parse_text(b"[]\n5").unwrap().sequence, Vec::<i64>::new());
    }

    #[test]
    fn test_parse_text_empty() {
        assert_eq!(parse_text(b""), Err(ParseError::Empty));
        assert_eq!(parse_text(b" \n\n"), Err(ParseError::Empty));
    }

    #[test]
    fn test_parse_text_invalid_integer() {
        assert_eq!(
            parse_text(b"1 x 3\n3"),
            Err(ParseError::InvalidInteger("x".to_string()))
        );
        assert_eq!(
            parse_text(b"1 2 3\nseven"),
            Err(ParseError::InvalidInteger("seven".to_string()))
        );
    }

    #[test]
    fn test_parse_text_out_of_range() {
        assert!(matches!(
            parse_text(b"99999999999999999999"),
            Err(ParseError::InvalidInteger(_))
        ));
    }

    #[test]
    fn test_parse_text_invalid_utf8() {
        assert_eq!(parse_text(b"1 2\n\xff"), Err(ParseError::InvalidUtf8));
    }

    #[test]
    fn test_parse_json() {
        let request = parse_json(br#"{"sequence": [1, 3, 5, 7, 9, 11], "target": 2}"#).unwrap();
        assert_eq!(request.sequence, vec![1, 3, 5, 7, 9, 11]);
        assert_eq!(request.target, 2);
    }

    #[test]
    fn test_parse_json_missing_sequence() {
        let request = parse_json(br#"{"target": 2}"#).unwrap();
        assert!(request.sequence.is_empty());
    }

    #[test]
    fn test_parse_json_errors() {
        assert!(matches!(parse_json(br#"{"sequence": [1]}"#), Err(ParseError::Json(_))));
        assert!(matches!(parse_json(b"[1, 2"), Err(ParseError::Json(_))));
        assert!(matches!(
            parse_json(br#"{"sequence": ["a"], "target": 1}"#),
            Err(ParseError::Json(_))
        ));
    }

    #[test]
    fn test_parse_dispatch() {
        let text = parse(b"1 2\n2", BodyFormat::Text).unwrap();
        let json = parse(br#"{"sequence":[1,2],"target":2}"#, BodyFormat::Json).unwrap();
        assert_eq!(text, json);
    }

    #[test]
    fn test_format_text() {
        assert_eq!(&format_text(3)[..], b"3\n");
        assert_eq!(&format_text(-1)[..], b"-1\n");
    }

    #[test]
    fn test_format_json() {
        assert_eq!(&format_json(3)[..], b"{\"index\":3}\n");
        assert_eq!(&format(-1, BodyFormat::Json)[..], b"{\"index\":-1}\n");
    }
}
