//! Character/byte offset translation.
//!
//! The engine's public offsets are character indices, matching the contract
//! of the entity recognizer. Regex matching and string splicing work in
//! bytes, so each invocation builds one [`OffsetMap`] over the input and
//! routes every conversion through it. On ASCII input the two coordinate
//! systems coincide; on multi-byte UTF-8 they do not.

/// Character-to-byte offset table for a single input string.
#[derive(Debug)]
pub struct OffsetMap {
    /// Byte offset of each character, plus a trailing entry for the total
    /// byte length. Strictly increasing.
    byte_of_char: Vec<usize>,
}

impl OffsetMap {
    pub fn new(text: &str) -> Self {
        let mut byte_of_char: Vec<usize> = text.char_indices().map(|(b, _)| b).collect();
        byte_of_char.push(text.len());
        Self { byte_of_char }
    }

    /// Length of the input in characters.
    pub fn char_len(&self) -> usize {
        self.byte_of_char.len() - 1
    }

    /// Byte offset of the character at `idx`. `idx == char_len()` maps to
    /// the byte length of the input.
    pub fn byte_of_char(&self, idx: usize) -> usize {
        self.byte_of_char[idx]
    }

    /// Character index of a byte offset lying on a character boundary
    /// (regex match bounds on the same input always are).
    pub fn char_of_byte(&self, byte: usize) -> usize {
        self.byte_of_char
            .binary_search(&byte)
            .unwrap_or_else(|insert| insert - 1)
    }

    /// Slice `text` by character offsets.
    pub fn slice<'t>(&self, text: &'t str, start: usize, end: usize) -> &'t str {
        &text[self.byte_of_char(start)..self.byte_of_char(end)]
    }
}
