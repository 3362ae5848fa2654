//! Guardian -> brain hand-off payload
//!
//! ```text
//! ANALYZE: <user text>
//! CONTEXT: ["earlier message", "user text"]
//! ```
//!
//! The context snapshot is a JSON array of the sender's messages so far.

const ANALYZE_MARKER: &str = "ANALYZE:";
const CONTEXT_MARKER: &str = "CONTEXT:";

/// A user query plus the sender's prior messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub query: String,
    pub context: Vec<String>,
}

impl AnalysisRequest {
    pub fn new(query: impl Into<String>, context: Vec<String>) -> Self {
        Self {
            query: query.into(),
            context,
        }
    }

    pub fn encode(&self) -> String {
        let context = serde_json::to_string(&self.context).unwrap_or_else(|_| "[]".to_string());
        format!("{} {}\n{} {}", ANALYZE_MARKER, self.query, CONTEXT_MARKER, context)
    }

    /// Parse a payload. Without an `ANALYZE:` marker the whole payload is the
    /// query; an unreadable context snapshot is treated as empty.
    pub fn parse(payload: &str) -> Self {
        let Some(start) = payload.find(ANALYZE_MARKER) else {
            return Self::new(payload.trim(), Vec::new());
        };
        let rest = &payload[start + ANALYZE_MARKER.len()..];

        // The snapshot starts a new line; JSON escapes newlines, so this
        // sequence can only be the real marker, never text inside the snapshot
        let marker = format!("\n{}", CONTEXT_MARKER);
        match rest.rfind(&marker) {
            Some(idx) => {
                let query = rest[..idx].trim();
                let snapshot = rest[idx + marker.len()..].trim();
                let context = serde_json::from_str(snapshot).unwrap_or_else(|e| {
                    tracing::debug!("Ignoring unreadable context snapshot: {}", e);
                    Vec::new()
                });
                Self::new(query, context)
            }
            None => Self::new(rest.trim(), Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_encode_layout() {
        let request = AnalysisRequest::new("I have a fever", vec!["hi".into(), "I have a fever".into()]);
        assert_eq!(
            request.encode(),
            "ANALYZE: I have a fever\nCONTEXT: [\"hi\",\"I have a fever\"]"
        );
    }

    #[test]
    fn test_parse_encoded() {
        let request = AnalysisRequest::new("headache since noon", vec!["headache since noon".into()]);
        assert_eq!(AnalysisRequest::parse(&request.encode()), request);
    }

    #[test]
    fn test_marker_less_payload_is_query() {
        let parsed = AnalysisRequest::parse("  just a fever  ");
        assert_eq!(parsed, AnalysisRequest::new("just a fever", vec![]));
    }

    #[test]
    fn test_missing_context() {
        let parsed = AnalysisRequest::parse("ANALYZE: cough");
        assert_eq!(parsed, AnalysisRequest::new("cough", vec![]));
    }

    #[test]
    fn test_unreadable_context() {
        let parsed = AnalysisRequest::parse("ANALYZE: nausea\nCONTEXT: ['nausea']");
        assert_eq!(parsed, AnalysisRequest::new("nausea", vec![]));
    }

    #[test]
    fn test_query_mentioning_context_marker() {
        let request = AnalysisRequest::new("what is CONTEXT: here", vec![]);
        assert_eq!(AnalysisRequest::parse(&request.encode()).query, "what is CONTEXT: here");
    }

    #[test]
    fn test_marker_inside_snapshot() {
        let request = AnalysisRequest::new(
            "what is CONTEXT: fever",
            vec!["hi".into(), "what is CONTEXT: fever".into()],
        );
        assert_eq!(AnalysisRequest::parse(&request.encode()), request);
    }

    #[test]
    fn test_multiline_query() {
        let request = AnalysisRequest::new(
            "line one\nCONTEXT: not really",
            vec!["line one\nCONTEXT: not really".into()],
        );
        assert_eq!(AnalysisRequest::parse(&request.encode()), request);
    }
}
