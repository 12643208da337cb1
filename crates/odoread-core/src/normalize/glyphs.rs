//! OCR-confusable glyph repair.

use std::collections::HashMap;

/// Characters OCR engines commonly return in place of odometer digits.
///
/// Keys are case-sensitive: `b` and `B` map to different digits.
const DEFAULT_GLYPHS: &[(char, char)] = &[
    ('|', '1'),
    ('!', '1'),
    ('i', '1'),
    ('I', '1'),
    ('s', '5'),
    ('S', '5'),
    ('§', '5'),
    ('$', '5'),
    ('t', '7'),
    ('T', '7'),
    ('?', '7'),
    ('Z', '7'),
    ('o', '0'),
    ('O', '0'),
    ('°', '0'),
    ('Q', '0'),
    ('D', '0'),
    ('b', '6'),
    ('B', '8'),
    ('g', '9'),
    ('q', '9'),
];

/// Immutable glyph → digit substitution table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphMap {
    table: HashMap<char, char>,
}

impl GlyphMap {
    /// A table with no substitutions.
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Build a table from explicit pairs. Later pairs win on duplicate keys.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (char, char)>,
    {
        Self {
            table: pairs.into_iter().collect(),
        }
    }

    /// Return a copy of this table with one more substitution.
    pub fn with(mut self, glyph: char, digit: char) -> Self {
        self.table.insert(glyph, digit);
        self
    }

    /// Return a copy of this table without the given glyph.
    pub fn without(mut self, glyph: char) -> Self {
        self.table.remove(&glyph);
        self
    }

    /// Replacement for a single character, if any.
    pub fn lookup(&self, c: char) -> Option<char> {
        self.table.get(&c).copied()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Substitute every mapped character in one left-to-right pass.
    ///
    /// Output has exactly as many characters as the input.
    pub fn substitute(&self, raw: &str) -> String {
        raw.chars().map(|c| self.lookup(c).unwrap_or(c)).collect()
    }
}

impl Default for GlyphMap {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_GLYPHS.iter().copied())
    }
}
