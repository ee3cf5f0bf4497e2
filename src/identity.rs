//! Processor identity extraction from normalized descriptions.
//!
//! A description decomposes as `company brand [make] model [moniker]
//! [version]`, e.g. `intel xeon platinum 8180 l v3`. Company, brand, and
//! make come from closed vocabularies matched by substring position; the
//! model number and its suffixes come from a positional pattern with greedy
//! backtracking. Every field is matched independently against the same
//! normalized string, so absence of one never disturbs another.
//!
//! This is a heuristic, not a grammar. Known limitation, preserved on
//! purpose: `Six-Core AMD Opteron(r) Processor 8425 HE` parses with brand
//! `core`, because the literal "core" inside "six-core" sits earlier in the
//! string than "opteron" and "core" is a valid brand for other companies.

use serde::{Deserialize, Serialize};

use crate::constants::vocab;
use crate::normalize::normalize;
use crate::types::{Description, IdentityValue};

/// Normalized identity fields parsed from one processor description.
///
/// Empty string means "not found", which is success, not an error: many
/// legitimate low-end processors genuinely have no make, moniker, or
/// version. Join equality downstream is the [`join_key`](Self::join_key)
/// 5-tuple; `company` is deliberately excluded from it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorIdentity {
    /// The description exactly as it arrived.
    pub original_description: Description,
    /// The description after normalization (see [`crate::normalize`]).
    pub clean_description: Description,
    /// Manufacturer, e.g. `intel`. Frequently absent in source data.
    pub company: IdentityValue,
    /// Product line, e.g. `xeon`.
    pub brand: IdentityValue,
    /// Tier/qualifier, e.g. `platinum`.
    pub make: IdentityValue,
    /// Bare numeric-led model code, e.g. `8180` or `i5-4570`.
    pub model: IdentityValue,
    /// 1-2 letter suffix, e.g. `l` or `he`.
    pub moniker: IdentityValue,
    /// Version suffix, `v` + one digit, e.g. `v3`.
    pub version: IdentityValue,
}

impl ProcessorIdentity {
    /// Normalize `raw` and extract identity fields from it.
    pub fn parse(raw: &str) -> Self {
        let mut identity = extract(&normalize(raw));
        identity.original_description = raw.to_string();
        identity
    }

    /// The 5-tuple used to match benchmark rows to family-reference rows.
    pub fn join_key(&self) -> [&str; 5] {
        [
            &self.brand,
            &self.make,
            &self.model,
            &self.moniker,
            &self.version,
        ]
    }
}

/// Leftmost vocabulary token occurring in `haystack`; vocabulary order
/// breaks position ties. Empty string when none occurs.
fn first_vocab_match(haystack: &str, vocabulary: &[&'static str]) -> IdentityValue {
    let mut best: Option<(usize, &str)> = None;
    for token in vocabulary {
        if let Some(pos) = haystack.find(token) {
            if best.map_or(true, |(best_pos, _)| pos < best_pos) {
                best = Some((pos, token));
            }
        }
    }
    best.map(|(_, token)| token.to_string()).unwrap_or_default()
}

/// Optional single-byte pieces preceding the mandatory digit run of the
/// model pattern: `[0-9]? [a-z]? [0-9]? [-or-whitespace]?`.
const MODEL_HEAD: [Piece; 4] = [
    Piece::OptDigit,
    Piece::OptLetter,
    Piece::OptDigit,
    Piece::OptSeparator,
];

#[derive(Clone, Copy)]
enum Piece {
    OptDigit,
    OptLetter,
    OptSeparator,
}

impl Piece {
    fn matches(self, byte: u8) -> bool {
        match self {
            Piece::OptDigit => byte.is_ascii_digit(),
            Piece::OptLetter => byte.is_ascii_lowercase(),
            Piece::OptSeparator => byte == b'-' || byte.is_ascii_whitespace(),
        }
    }
}

/// Match the model pattern at `start`, returning the end offset on success.
///
/// The pattern is `[0-9]? [a-z]? [0-9]? [-or-space]? [0-9]{2,4}` plus, when
/// `with_tail` is set, a trailing `[a-z]? [0-9]?`. Optionals are greedy with
/// backtracking: each is tried present first, absent on failure, so
/// candidates like `a53` (letter, digit, then a two-digit run) resolve the
/// same way at every call site.
fn match_model_at(bytes: &[u8], start: usize, with_tail: bool) -> Option<usize> {
    match_pieces(bytes, start, &MODEL_HEAD, with_tail)
}

fn match_pieces(bytes: &[u8], pos: usize, pieces: &[Piece], with_tail: bool) -> Option<usize> {
    let Some((piece, rest)) = pieces.split_first() else {
        return match_digit_run(bytes, pos, with_tail);
    };
    if bytes.get(pos).copied().is_some_and(|byte| piece.matches(byte)) {
        if let Some(end) = match_pieces(bytes, pos + 1, rest, with_tail) {
            return Some(end);
        }
    }
    match_pieces(bytes, pos, rest, with_tail)
}

/// The mandatory 2-4 digit run, greedy, then the optional glued tail.
fn match_digit_run(bytes: &[u8], pos: usize, with_tail: bool) -> Option<usize> {
    let mut run = 0;
    while run < 4 && bytes.get(pos + run).copied().is_some_and(|b| b.is_ascii_digit()) {
        run += 1;
    }
    if run < 2 {
        return None;
    }
    let mut end = pos + run;
    if with_tail {
        if bytes.get(end).copied().is_some_and(|b| b.is_ascii_lowercase()) {
            end += 1;
            if bytes.get(end).copied().is_some_and(|b| b.is_ascii_digit()) {
                end += 1;
            }
        }
    }
    Some(end)
}

/// Leftmost model candidate in the normalized string, trimmed of the
/// whitespace boundary that anchors it.
///
/// The boundary is a mandatory preceding whitespace character, so a model
/// sitting at the very start of a description is not found; source strings
/// always lead with at least a company or brand word, and preserving the
/// boundary keeps clock-speed fragments like `2.6` from matching.
fn raw_model_candidate(normalized: &str) -> &str {
    let bytes = normalized.as_bytes();
    for boundary in 0..bytes.len() {
        if !bytes[boundary].is_ascii_whitespace() {
            continue;
        }
        if let Some(end) = match_model_at(bytes, boundary + 1, true) {
            return normalized[boundary + 1..end].trim();
        }
    }
    ""
}

/// Re-match the pattern without the glued tail, anchored at the start of the
/// raw candidate, yielding the bare numeric-led model code (`8876v3` →
/// `8876`, `e4-2485m` → `e4-2485`).
fn clean_model(raw_candidate: &str) -> IdentityValue {
    match match_model_at(raw_candidate.as_bytes(), 0, false) {
        Some(end) => raw_candidate[..end].trim().to_string(),
        None => String::new(),
    }
}

/// `v` + one digit glued to the end of the raw candidate.
fn glued_version(raw_candidate: &str) -> IdentityValue {
    let bytes = raw_candidate.as_bytes();
    if bytes.len() >= 2
        && bytes[bytes.len() - 2] == b'v'
        && bytes[bytes.len() - 1].is_ascii_digit()
    {
        raw_candidate[raw_candidate.len() - 2..].to_string()
    } else {
        String::new()
    }
}

/// One letter glued to the end of the raw candidate.
fn glued_moniker(raw_candidate: &str) -> IdentityValue {
    let bytes = raw_candidate.as_bytes();
    if bytes.last().copied().is_some_and(|b| b.is_ascii_lowercase()) {
        raw_candidate[raw_candidate.len() - 1..].to_string()
    } else {
        String::new()
    }
}

/// First whitespace-preceded `v` + digit token in the normalized string.
fn standalone_version(normalized: &str) -> IdentityValue {
    let bytes = normalized.as_bytes();
    for boundary in 0..bytes.len().saturating_sub(2) {
        if bytes[boundary].is_ascii_whitespace()
            && bytes[boundary + 1] == b'v'
            && bytes[boundary + 2].is_ascii_digit()
        {
            return normalized[boundary + 1..boundary + 3].to_string();
        }
    }
    String::new()
}

/// First 1-2 letter token standing alone in the normalized string: either
/// whitespace-bounded on both sides, or the letters ending the string.
fn standalone_moniker(normalized: &str) -> IdentityValue {
    let bytes = normalized.as_bytes();
    for pos in 0..bytes.len() {
        // Whitespace-bounded token, longest (2-letter) form first.
        if bytes[pos].is_ascii_whitespace() {
            for len in [2usize, 1] {
                let end = pos + 1 + len;
                if end < bytes.len()
                    && bytes[pos + 1..end].iter().all(u8::is_ascii_lowercase)
                    && bytes[end].is_ascii_whitespace()
                {
                    return normalized[pos + 1..end].to_string();
                }
            }
        }
        // Letters running to the end of the string, from two chars out.
        if pos + 2 >= bytes.len() && bytes[pos..].iter().all(u8::is_ascii_lowercase) {
            return normalized[pos..].to_string();
        }
    }
    String::new()
}

/// Extract identity fields from an already-normalized description.
///
/// Total over arbitrary input: any field without a match comes back empty.
/// Glued-to-model suffixes take precedence over standalone tokens because
/// vendors place the high-confidence version/moniker immediately after the
/// model number; the floating form is only read when that spot is empty.
pub fn extract(normalized: &str) -> ProcessorIdentity {
    let raw_candidate = raw_model_candidate(normalized);
    let model_version = glued_version(raw_candidate);
    let model_moniker = glued_moniker(raw_candidate);
    let version = if model_version.is_empty() {
        standalone_version(normalized)
    } else {
        model_version
    };
    let moniker = if model_moniker.is_empty() {
        standalone_moniker(normalized)
    } else {
        model_moniker
    };
    ProcessorIdentity {
        original_description: String::new(),
        clean_description: normalized.to_string(),
        company: first_vocab_match(normalized, &vocab::COMPANIES),
        brand: first_vocab_match(normalized, &vocab::BRANDS),
        make: first_vocab_match(normalized, &vocab::MAKES),
        model: clean_model(raw_candidate),
        moniker,
        version,
    }
}
