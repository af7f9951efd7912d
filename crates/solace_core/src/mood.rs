//! Mood capture and canonical pattern encoding.
//!
//! Three tracked life dimensions are reported as raw labels and collapsed
//! into a short symbolic code ("GBB" etc.) that drives every downstream
//! table lookup.

use std::fmt;

/// One classified mood observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodSymbol {
    Good,
    Bad,
}

impl MoodSymbol {
    /// Classify a raw label. Only a label that case-insensitively
    /// equals "good" counts as `Good`; every other value — padded,
    /// malformed or garbage — resolves to `Bad`. A dimension we cannot
    /// read is treated as one that needs support rather than dropped
    /// from the pattern.
    pub fn classify(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("good") {
            Self::Good
        } else {
            Self::Bad
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Good => 'G',
            Self::Bad => 'B',
        }
    }
}

/// The canonical code for one three-dimension reading.
///
/// Closed over the 8 possible three-symbol combinations plus `Other` for
/// anything that is not exactly three symbols long, so table lookups are
/// exhaustive matches with an explicit fallback arm instead of runtime
/// map misses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternCode {
    Ggg,
    Ggb,
    Gbg,
    Gbb,
    Bgg,
    Bgb,
    Bbg,
    Bbb,
    Other,
}

/// An ordered sequence of classified mood symbols.
///
/// The encoder itself accepts any length; only exact three-symbol
/// patterns resolve to a non-`Other` [`PatternCode`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MoodPattern(Vec<MoodSymbol>);

impl MoodPattern {
    /// Encode an ordered list of raw mood labels.
    pub fn encode<I, S>(samples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            samples
                .into_iter()
                .map(|s| MoodSymbol::classify(s.as_ref()))
                .collect(),
        )
    }

    /// Reconstruct a pattern from a previously rendered textual form.
    ///
    /// Scans for the literal words "Good"/"Bad" (case-insensitive) in
    /// left-to-right order. When the text contains no such words it is
    /// read as a bare symbol code instead, so the exact `G`/`B` string
    /// handed out by the opening response round-trips verbatim.
    pub fn from_tagged_text(text: &str) -> Self {
        let lower = text.to_lowercase();
        let mut symbols = Vec::new();
        let mut rest = lower.as_str();
        while !rest.is_empty() {
            if rest.starts_with("good") {
                symbols.push(MoodSymbol::Good);
                rest = &rest[4..];
            } else if rest.starts_with("bad") {
                symbols.push(MoodSymbol::Bad);
                rest = &rest[3..];
            } else {
                let mut chars = rest.chars();
                chars.next();
                rest = chars.as_str();
            }
        }

        let trimmed = text.trim();
        if symbols.is_empty()
            && !trimmed.is_empty()
            && trimmed
                .chars()
                .all(|c| matches!(c.to_ascii_uppercase(), 'G' | 'B'))
        {
            symbols = trimmed
                .chars()
                .map(|c| match c.to_ascii_uppercase() {
                    'G' => MoodSymbol::Good,
                    _ => MoodSymbol::Bad,
                })
                .collect();
        }

        Self(symbols)
    }

    pub fn symbols(&self) -> &[MoodSymbol] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Collapse to the canonical table key.
    pub fn code(&self) -> PatternCode {
        use MoodSymbol::{Bad as B, Good as G};
        match self.0.as_slice() {
            [G, G, G] => PatternCode::Ggg,
            [G, G, B] => PatternCode::Ggb,
            [G, B, G] => PatternCode::Gbg,
            [G, B, B] => PatternCode::Gbb,
            [B, G, G] => PatternCode::Bgg,
            [B, G, B] => PatternCode::Bgb,
            [B, B, G] => PatternCode::Bbg,
            [B, B, B] => PatternCode::Bbb,
            _ => PatternCode::Other,
        }
    }
}

impl fmt::Display for MoodPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sym in &self.0 {
            write!(f, "{}", sym.as_char())?;
        }
        Ok(())
    }
}
