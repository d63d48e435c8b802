//! core::selection
//!
//! Parser for the operator's screen-selection expression.
//!
//! # Grammar
//!
//! Comma-separated tokens over `N` screens (1-based in user-facing
//! numbering):
//!
//! - `all` - select every screen, ignoring the rest of the expression
//! - `none` - select nothing, ignoring the rest of the expression
//! - `i` - a single screen, `1 <= i <= N`
//! - `a-b` - an inclusive range, `1 <= a <= b <= N`
//!
//! Tokens that fail to parse or fall out of bounds are reported and
//! skipped; they never abort the selection. The result is always
//! materialized in ascending index order regardless of the order tokens
//! were typed, and overlapping tokens collapse.

use std::collections::BTreeSet;

/// Zero-based indices into the deduplicated screen list, ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSet {
    indices: BTreeSet<usize>,
}

impl SelectionSet {
    fn empty() -> Self {
        Self {
            indices: BTreeSet::new(),
        }
    }

    fn full(screen_count: usize) -> Self {
        Self {
            indices: (0..screen_count).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }
}

/// Outcome of parsing one selection expression.
///
/// `warnings` carries one message per skipped token; an expression made
/// entirely of bad tokens yields an empty selection plus warnings, which
/// callers treat the same as `none`.
#[derive(Debug)]
pub struct ParsedSelection {
    pub selected: SelectionSet,
    pub warnings: Vec<String>,
}

/// Parse a free-form selection expression over `screen_count` screens.
///
/// # Example
///
/// ```
/// use aomerge::core::selection::parse_selection;
///
/// let parsed = parse_selection("5,1-3", 6);
/// let indices: Vec<usize> = parsed.selected.iter().collect();
/// assert_eq!(indices, vec![0, 1, 2, 4]);
/// ```
pub fn parse_selection(input: &str, screen_count: usize) -> ParsedSelection {
    let mut indices = BTreeSet::new();
    let mut warnings = Vec::new();

    for token in input.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        if token.eq_ignore_ascii_case("all") {
            return ParsedSelection {
                selected: SelectionSet::full(screen_count),
                warnings,
            };
        }
        if token.eq_ignore_ascii_case("none") {
            return ParsedSelection {
                selected: SelectionSet::empty(),
                warnings,
            };
        }

        match parse_token(token, screen_count) {
            Ok(range) => indices.extend(range),
            Err(reason) => warnings.push(format!("ignoring '{}': {}", token, reason)),
        }
    }

    ParsedSelection {
        selected: SelectionSet { indices },
        warnings,
    }
}

/// Parse a single numeric or range token into zero-based indices.
fn parse_token(token: &str, screen_count: usize) -> Result<std::ops::Range<usize>, String> {
    if let Some((a, b)) = token.split_once('-') {
        let a = parse_ordinal(a, screen_count)?;
        let b = parse_ordinal(b, screen_count)?;
        if a > b {
            return Err(format!("range start {} exceeds end {}", a, b));
        }
        Ok(a - 1..b)
    } else {
        let i = parse_ordinal(token, screen_count)?;
        Ok(i - 1..i)
    }
}

/// Parse a 1-based screen number and bounds-check it.
fn parse_ordinal(text: &str, screen_count: usize) -> Result<usize, String> {
    let n: usize = text
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a screen number", text.trim()))?;
    if n < 1 || n > screen_count {
        return Err(format!("screen {} is out of range (1-{})", n, screen_count));
    }
    Ok(n)
}
