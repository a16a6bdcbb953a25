//! Numeric-prefix ordering for chapter folders and segment files.
//!
//! Lecture material is named `0 - Introduction.mp4`, `75 - Intro.mp4`,
//! `3_Chapter`, and so on. Lexical order puts `10` before `2`, so every
//! listing is sorted by the integer value of the leading digit run instead.

use once_cell::sync::Lazy;
use regex::Regex;

/// `<digits>_` at the start of a chapter folder name.
static CHAPTER_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]+_").unwrap_or_else(|e| unreachable!("invalid chapter pattern: {e}"))
});

/// Sort key derived from the leading digits of a name.
///
/// Every `Index` sorts before `Unordered`, so names without a numeric prefix
/// end up after all numbered ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OrderKey {
    /// Value of the leading decimal digit run.
    Index(u64),
    /// The name does not start with a digit.
    Unordered,
}

impl OrderKey {
    /// Returns the parsed index, if any.
    #[must_use]
    pub fn index(self) -> Option<u64> {
        match self {
            OrderKey::Index(n) => Some(n),
            OrderKey::Unordered => None,
        }
    }
}

/// Computes the ordering key of a file or directory name.
///
/// A digit run too large for `u64` saturates to `u64::MAX`.
#[must_use]
pub fn order_key(name: &str) -> OrderKey {
    let digits = name.bytes().take_while(u8::is_ascii_digit);
    let mut value: u64 = 0;
    let mut seen = false;
    for digit in digits {
        seen = true;
        value = value
            .saturating_mul(10)
            .saturating_add(u64::from(digit - b'0'));
    }

    if seen {
        OrderKey::Index(value)
    } else {
        OrderKey::Unordered
    }
}

/// Reports whether a directory name looks like a chapter folder (`<digits>_...`).
#[must_use]
pub fn has_chapter_prefix(name: &str) -> bool {
    CHAPTER_PREFIX.is_match(name)
}
