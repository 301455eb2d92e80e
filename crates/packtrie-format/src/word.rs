//! Code word encoding.
//!
//! Bit layout of the first word of every entry:
//! - Bit 31: entry carries a value word
//! - Bit 30: entry carries a jump word
//! - Bits 29-16: reserved
//! - Bits 15-0: UTF-16 code unit
//!
//! A raw word of zero terminates a table. The check is done on the raw word,
//! before masking, so a flagged entry with code unit 0 is not a terminator.

/// Flag bit: a value word follows the code word.
pub const VALUE_BIT: u32 = 0x8000_0000;
/// Flag bit: a jump word follows the code word (and the value word, if any).
pub const JUMP_BIT: u32 = 0x4000_0000;
/// Mask selecting the code unit.
pub const CODE_MASK: u32 = 0x0000_FFFF;

/// A raw code word, decoded on access.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Word(u32);

impl Word {
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn has_value(self) -> bool {
        self.0 & VALUE_BIT != 0
    }

    #[inline]
    pub const fn has_jump(self) -> bool {
        self.0 & JUMP_BIT != 0
    }

    #[inline]
    pub const fn code(self) -> u16 {
        (self.0 & CODE_MASK) as u16
    }

    /// Scalar value of the code unit, `None` for lone surrogates.
    pub fn char(self) -> Option<char> {
        char::from_u32(self.code() as u32)
    }

    #[inline]
    pub const fn is_terminator(self) -> bool {
        self.0 == 0
    }

    /// Non-zero word without value or jump: the root table's start marker.
    #[inline]
    pub const fn is_placeholder(self) -> bool {
        !self.is_terminator() && !self.has_value() && !self.has_jump()
    }

    /// Number of words the entry occupies, code word included.
    #[inline]
    pub const fn width(self) -> u32 {
        1 + self.has_value() as u32 + self.has_jump() as u32
    }
}

impl From<u32> for Word {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

/// Map a code unit to a character for listings.
///
/// Lone surrogates have no scalar value and become U+FFFD.
pub fn code_to_char(code: u16) -> char {
    char::from_u32(code as u32).unwrap_or(char::REPLACEMENT_CHARACTER)
}
