//! Answer normalization
//!
//! Agent responses arrive as arbitrary JSON: a bare string, a multi-step
//! transcript, or a structured object. Only the final delivered answer is
//! judged, with any delimited reasoning spans removed first. Both functions
//! are total - a degenerate response normalizes to an empty string, which
//! downstream judging classifies rather than failing on.

use regex::Regex;
use serde_json::Value;

/// Keys that carry the answer text directly, in priority order
const ANSWER_KEYS: [&str; 5] = ["final_answer", "answer", "content", "text", "output"];

/// Keys that carry a multi-step transcript; the last entry is the final step
const TRANSCRIPT_KEYS: [&str; 2] = ["messages", "steps"];

const THINK_OPEN: &str = "<think>";
const THINK_CLOSE: &str = "</think>";

/// Extract the final answer text from an arbitrary agent response value.
///
/// Strings pass through, arrays resolve to their last element, objects are
/// probed for answer-bearing then transcript-bearing keys. Unknown non-empty
/// shapes are stringified so the judge still has something to classify;
/// null and empty objects yield an empty string.
pub fn extract_final_answer(response: &Value) -> String {
    match response {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.last().map(extract_final_answer).unwrap_or_default(),
        Value::Object(map) => {
            for key in ANSWER_KEYS {
                if let Some(value) = map.get(key) {
                    return extract_final_answer(value);
                }
            }
            for key in TRANSCRIPT_KEYS {
                if let Some(Value::Array(items)) = map.get(key) {
                    if let Some(last) = items.last() {
                        return extract_final_answer(last);
                    }
                }
            }
            if map.is_empty() {
                String::new()
            } else {
                response.to_string()
            }
        }
        other => other.to_string(),
    }
}

/// Remove `<think>...</think>` reasoning spans from answer text.
///
/// Identity transform when no spans exist. Unbalanced delimiters are
/// tolerated: a stray close keeps only the text after the last one, a stray
/// open drops everything from it onward.
pub fn strip_think(text: &str) -> String {
    let mut stripped = text.to_string();

    if let Ok(re) = Regex::new(r"(?s)<think>.*?</think>") {
        stripped = re.replace_all(&stripped, "").to_string();
    }

    if let Some(idx) = stripped.rfind(THINK_CLOSE) {
        stripped = stripped[idx + THINK_CLOSE.len()..].to_string();
    }

    if let Some(idx) = stripped.find(THINK_OPEN) {
        stripped.truncate(idx);
    }

    stripped
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_plain_string() {
        assert_eq!(extract_final_answer(&json!("Red and blue.")), "Red and blue.");
    }

    #[test]
    fn test_extract_null_is_empty() {
        assert_eq!(extract_final_answer(&Value::Null), "");
    }

    #[test]
    fn test_extract_array_takes_last() {
        let response = json!(["draft one", "draft two", "Final answer."]);
        assert_eq!(extract_final_answer(&response), "Final answer.");
    }

    #[test]
    fn test_extract_empty_array_is_empty() {
        assert_eq!(extract_final_answer(&json!([])), "");
    }

    #[test]
    fn test_extract_answer_key_priority() {
        let response = json!({"final_answer": "the answer", "text": "ignored"});
        assert_eq!(extract_final_answer(&response), "the answer");
    }

    #[test]
    fn test_extract_nested_content() {
        let response = json!({"content": {"text": "nested"}});
        assert_eq!(extract_final_answer(&response), "nested");
    }

    #[test]
    fn test_extract_transcript_takes_last_message() {
        let response = json!({
            "messages": [
                {"content": "step one"},
                {"content": "the final reply"}
            ]
        });
        assert_eq!(extract_final_answer(&response), "the final reply");
    }

    #[test]
    fn test_extract_unknown_object_stringifies() {
        let response = json!({"foo": 1});
        assert_eq!(extract_final_answer(&response), r#"{"foo":1}"#);
    }

    #[test]
    fn test_extract_empty_object_is_empty() {
        assert_eq!(extract_final_answer(&json!({})), "");
    }

    #[test]
    fn test_extract_scalar_stringifies() {
        assert_eq!(extract_final_answer(&json!(42)), "42");
    }

    #[test]
    fn test_strip_think_identity_without_spans() {
        assert_eq!(strip_think("Just an answer."), "Just an answer.");
    }

    #[test]
    fn test_strip_think_removes_span() {
        assert_eq!(
            strip_think("<think>let me reason</think>The answer."),
            "The answer."
        );
    }

    #[test]
    fn test_strip_think_removes_multiple_spans() {
        assert_eq!(
            strip_think("<think>a</think>one <think>b</think>two"),
            "one two"
        );
    }

    #[test]
    fn test_strip_think_multiline_span() {
        assert_eq!(
            strip_think("<think>line one\nline two</think>Done."),
            "Done."
        );
    }

    #[test]
    fn test_strip_think_stray_close_keeps_tail() {
        assert_eq!(strip_think("reasoning</think>The answer."), "The answer.");
    }

    #[test]
    fn test_strip_think_stray_open_drops_tail() {
        assert_eq!(strip_think("The answer.<think>half a thought"), "The answer.");
    }

    #[test]
    fn test_strip_think_empty_input() {
        assert_eq!(strip_think(""), "");
    }
}
