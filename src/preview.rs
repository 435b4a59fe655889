//! Short previews of JSON payloads for debug output

use serde_json::Value;

/// Number of lines [`preview`] keeps when the caller has no preference
pub const DEFAULT_PREVIEW_LINES: usize = 5;

/// Pretty-print `response` with 2-space indentation and keep the first
/// `num_lines` lines.
///
/// When lines were cut, a last line `"<K> more lines hidden"` says how many;
/// otherwise the result ends with a newline.
///
/// # Examples
///
/// ```
/// use pytr_utils::preview;
/// use serde_json::json;
///
/// let text = preview(&json!({"a": 1, "b": 2, "c": 3}), 2);
/// assert_eq!(text, "{\n  \"a\": 1,\n3 more lines hidden");
/// ```
pub fn preview(response: &Value, num_lines: usize) -> String {
    let pretty = serde_json::to_string_pretty(response).unwrap_or_default();
    let lines: Vec<&str> = pretty.lines().collect();
    let shown = num_lines.min(lines.len());
    let head = lines[..shown].join("\n");

    match lines.len() - shown {
        0 => format!("{}\n", head),
        hidden => format!("{}\n{} more lines hidden", head, hidden),
    }
}
