//! Operator-facing rendering. All probe output goes to stdout; status
//! markers distinguish success (`✅`), failure (`❌`), and extracted text
//! (`📝`) so runs can be skimmed in a terminal scrollback.

use serde_json::Value;

use crate::Error;

/// Pretty-print a JSON value with 2-space indentation, non-ASCII preserved.
pub fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// One-line diagnostic for an error, including the remote body when one was
/// captured.
pub fn describe(err: &Error) -> String {
    match err {
        Error::Remote { status, body } => format!("HTTP {status}: {body}"),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pretty_keeps_non_ascii() {
        let rendered = pretty(&json!({"text": "héllo"}));
        assert!(rendered.contains("héllo"));
    }

    #[test]
    fn describe_includes_remote_body() {
        let err = Error::Remote {
            status: 503,
            body: json!({"error": "overloaded"}),
        };
        let described = describe(&err);
        assert!(described.contains("503"));
        assert!(described.contains("overloaded"));
    }
}
