//! Text normalization for processor descriptions.
//!
//! Vendor strings mix marketing asides, SKU tags, trademark remnants, and
//! clock speeds in with the parts we care about. Normalization lower-cases
//! the string, strips a fixed junk vocabulary wherever it occurs, and cuts
//! the string at the first `(` (marketing asides like "Turbo Boost up to..."
//! live there). Every step is a no-op on input it does not apply to; nothing
//! here can fail.

use crate::types::Description;

/// A strippable token tried during junk removal.
enum Junk {
    /// Exact lowercase literal.
    Literal(&'static str),
    /// Bracketed vendor SKU code such as `[338-bncg]`.
    BracketedCode,
}

/// Junk alternatives, tried in order at each scan position.
/// "dell"/"sku" cover the one description that embeds a Dell order tag; the
/// comma entry cannot simply cut the string at the first comma because one
/// description carries useful text after a comma.
const JUNK: [Junk; 9] = [
    Junk::Literal("dell"),
    Junk::Literal("sku"),
    Junk::BracketedCode,
    Junk::Literal(","),
    Junk::Literal("cpu"),
    Junk::Literal("@"),
    Junk::Literal("(r)"),
    Junk::Literal("processor"),
    Junk::Literal("ghz"),
];

/// Length of the bracketed SKU code at the start of `rest`, if one is there.
/// The code body is one or more lowercase letters, digits, or hyphens.
fn bracketed_code_len(rest: &str) -> Option<usize> {
    let body = rest.strip_prefix('[')?;
    let body_len = body
        .bytes()
        .take_while(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
        .count();
    if body_len == 0 {
        return None;
    }
    if body.as_bytes().get(body_len) == Some(&b']') {
        Some(body_len + 2)
    } else {
        None
    }
}

/// Length of the junk token at the start of `rest`, if any alternative fires.
fn junk_match_len(rest: &str) -> Option<usize> {
    for junk in &JUNK {
        match junk {
            Junk::Literal(literal) => {
                if rest.starts_with(literal) {
                    return Some(literal.len());
                }
            }
            Junk::BracketedCode => {
                if let Some(len) = bracketed_code_len(rest) {
                    return Some(len);
                }
            }
        }
    }
    None
}

/// Remove every occurrence of the junk vocabulary from an already-lowercased
/// description. Stripped tokens leave their surrounding whitespace behind.
pub fn remove_junk(description: &str) -> String {
    let mut cleaned = String::with_capacity(description.len());
    let mut idx = 0;
    while idx < description.len() {
        let rest = &description[idx..];
        if let Some(len) = junk_match_len(rest) {
            idx += len;
            continue;
        }
        let char_len = rest.chars().next().map_or(1, char::len_utf8);
        cleaned.push_str(&rest[..char_len]);
        idx += char_len;
    }
    cleaned
}

/// Truncate at the first `(`, discarding everything from that point onward.
/// Descriptions without a parenthesis pass through whole.
pub fn split_off_parens(description: &str) -> &str {
    match description.find('(') {
        Some(pos) => &description[..pos],
        None => description,
    }
}

/// Normalize a raw description: lower-case, strip junk, truncate at `(`.
///
/// Junk removal runs before truncation so that the `(r)` trademark remnant
/// does not become the cut point. Truncation is idempotent: normalizing an
/// already-normalized string is a no-op.
pub fn normalize(raw: &str) -> Description {
    let lowered = raw.to_lowercase();
    split_off_parens(&remove_junk(&lowered)).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_junk_strips_every_occurrence() {
        let input = "dell xeon 2345 cpu 5 processor";
        assert_eq!(remove_junk(input), " xeon 2345  5 ");
    }

    #[test]
    fn remove_junk_strips_bracketed_sku_codes() {
        assert_eq!(remove_junk("epyc [338-bncg] 7601"), "epyc  7601");
        // An unterminated bracket is not a SKU code.
        assert_eq!(remove_junk("epyc [338 7601"), "epyc [338 7601");
    }

    #[test]
    fn split_off_parens_cuts_at_first_paren() {
        assert_eq!(split_off_parens("important (not important)"), "important ");
        assert_eq!(split_off_parens("no asides here"), "no asides here");
    }

    #[test]
    fn normalize_lowercases_strips_and_truncates() {
        let input = "Intel Xeon 2345 CPU 5 (@ 4 GHz)";
        assert_eq!(normalize(input), "intel xeon 2345  5 ");
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize("Intel Xeon Platinum 8176 v7 CPU 2.10 GHz (Turbo up to 2.80 GHz)");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalize_handles_empty_and_junk_free_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("plain text"), "plain text");
    }
}
