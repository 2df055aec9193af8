//! Allowlist shaping: splitting raw wizard input, normalizing entries, and
//! idempotent merging.

use {corvid_channels::gating::WILDCARD, serde_json::Value};

/// Split raw multi-entry input on newlines, commas, and semicolons.
///
/// Empty segments (including trailing separators) are dropped:
/// `" a, b \nc;  ;\n"` yields `["a", "b", "c"]`.
pub fn split_entries(raw: &str) -> Vec<String> {
    raw.split(['\n', ',', ';'])
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Render one raw allowlist entry as text.
///
/// Legacy configs store numeric sender IDs alongside strings; anything else
/// is dropped.
fn entry_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.trim().to_string()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Normalize raw entries into deduplicated trimmed text.
///
/// The wildcard passes through untouched regardless of `normalize`. Entries
/// the normalizer maps to nothing (or to blank text) are silently dropped.
pub fn normalize_entries(
    entries: &[Value],
    normalize: Option<&(dyn Fn(&str) -> Option<String> + Send + Sync)>,
) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in entries {
        let Some(text) = entry_text(value) else {
            continue;
        };
        if text.is_empty() {
            continue;
        }
        let entry = if text == WILDCARD {
            text
        } else {
            match normalize {
                Some(normalize) => match normalize(&text) {
                    Some(mapped) if !mapped.trim().is_empty() => mapped.trim().to_string(),
                    _ => continue,
                },
                None => text,
            }
        };
        if !out.iter().any(|existing| *existing == entry) {
            out.push(entry);
        }
    }
    out
}

/// Merge new entries into an existing allowlist.
///
/// Existing entries come first; duplicates and blanks are dropped and
/// first-occurrence order is kept, so merging a list with itself is a no-op.
pub fn merge_allow_from(existing: &[Value], additions: &[String]) -> Vec<String> {
    let mut out = normalize_entries(existing, None);
    for addition in additions {
        let trimmed = addition.trim();
        if trimmed.is_empty() || out.iter().any(|existing| existing == trimmed) {
            continue;
        }
        out.push(trimmed.to_string());
    }
    out
}
