//! Verdict location and parsing
//!
//! Judge output is free-form text. Locating the verdict and parsing it are
//! separate steps: truncation defends against judges that echo the prompt's
//! worked examples (which contain their own status lines) before the real
//! verdict, and parsing is a conservative substring check that defaults to
//! unsolved when no clear signal is present.

/// Literal phrase preceding the judge's status token
pub const VERDICT_MARKER: &str = "Answer Status:";

/// Truncate judge text to start at the last occurrence of the verdict
/// marker. A prompt-echoing judge repeats the worked examples' status lines
/// first; only the final occurrence precedes the actual verdict. Text
/// without the marker passes through unmodified.
pub fn trim_to_verdict(text: &str) -> &str {
    match text.rfind(VERDICT_MARKER) {
        Some(idx) => &text[idx..],
        None => text,
    }
}

/// Parse a solved/unsolved verdict out of judge text.
///
/// "unsolved" must be checked before "solved": the former contains the
/// latter as a substring, so the reversed order would never report an
/// unsolved verdict. Ambiguous output (neither token) counts as unsolved.
pub fn parse_verdict(text: &str) -> bool {
    let lowered = text.trim().to_lowercase();

    if lowered.contains("unsolved") {
        false
    } else if lowered.contains("solved") {
        true
    } else {
        tracing::warn!(
            preview = %preview(text, 100),
            "no verdict token in judge output, defaulting to unsolved"
        );
        false
    }
}

/// Char-safe prefix of `text` for log output.
pub(crate) fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let prefix: String = text.chars().take(max_chars).collect();
        format!("{}...", prefix)
    }
}
