//! Candidate-JSON isolation for provider output.
//!
//! Providers are instructed to return bare JSON but routinely wrap it in a
//! Markdown code fence or surround it with prose. These helpers isolate the
//! span worth handing to the JSON parser; they never parse or validate.

/// Strip a leading ```` ```json ```` / ```` ``` ```` marker and a trailing
/// ```` ``` ```` marker if present, then trim surrounding whitespace.
///
/// Best-effort textual strip of the exact fence convention the provider is
/// prompted with, not a Markdown parse. Unfenced input passes through
/// untouched, which makes the strip idempotent.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the optional language tag up to the end of the fence line.
    let rest = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest.strip_prefix("json").unwrap_or(rest),
    };
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Locate the first balanced top-level `{...}` span in `text`.
///
/// Used as the fallback when the de-fenced text still fails to parse, e.g.
/// when the provider prepends "Sure, here is the result:". Tracks string
/// literals so braces inside quoted values do not confuse the depth count.
pub fn first_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (offset, &b) in bytes[start..].iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }
    None
}
