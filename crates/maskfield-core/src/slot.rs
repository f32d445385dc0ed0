#![forbid(unsafe_code)]

//! Slot classes and the compiled per-position [`Slot`].
//!
//! A mask template assigns every position one of three editable classes or
//! marks it as a literal shown verbatim. Classification is a pure predicate:
//! a slot either accepts a candidate character or it does not.

/// Mask marker: position accepts decimal digits only.
pub const MASK_DIGIT: char = 'D';
/// Mask marker: position accepts letters or decimal digits.
pub const MASK_DIGIT_OR_LETTER: char = 'W';
/// Mask marker: position accepts letters only.
pub const MASK_LETTER: char = 'A';

/// Hint marker: this position really is an editable slot. Any other hint
/// character forces the position to a literal, even over a reserved marker.
pub const HINT_SLOT: char = '#';

/// Placeholder shown in an unfilled editable slot when the placeholder
/// string does not cover its index.
pub const DEFAULT_PLACEHOLDER: char = '_';

/// Character class a mask position accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotClass {
    /// Decimal digits (`D`).
    Digit,
    /// Alphabetic characters (`A`).
    Letter,
    /// Letters or decimal digits (`W`).
    DigitOrLetter,
    /// Not a reserved marker; shown verbatim, accepts nothing.
    Literal,
}

impl SlotClass {
    /// Classify a raw mask-template character.
    #[must_use]
    pub const fn from_marker(marker: char) -> Self {
        match marker {
            MASK_DIGIT => Self::Digit,
            MASK_LETTER => Self::Letter,
            MASK_DIGIT_OR_LETTER => Self::DigitOrLetter,
            _ => Self::Literal,
        }
    }

    /// Whether `c` satisfies this class. Literals accept nothing.
    #[must_use]
    pub fn accepts(self, c: char) -> bool {
        match self {
            Self::Digit => c.is_ascii_digit(),
            Self::Letter => c.is_alphabetic(),
            Self::DigitOrLetter => c.is_alphabetic() || c.is_ascii_digit(),
            Self::Literal => false,
        }
    }
}

/// One compiled mask position.
///
/// Immutable once built; the whole table is recompiled when the template
/// changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    mask_char: char,
    class: SlotClass,
    editable: bool,
    placeholder: char,
}

impl Slot {
    /// Build a slot from its raw mask character, editability, and placeholder.
    #[must_use]
    pub const fn new(mask_char: char, editable: bool, placeholder: char) -> Self {
        Self {
            mask_char,
            class: SlotClass::from_marker(mask_char),
            editable,
            placeholder,
        }
    }

    /// The raw character this position had in the mask template.
    #[inline]
    #[must_use]
    pub const fn mask_char(&self) -> char {
        self.mask_char
    }

    /// The character class this position accepts.
    #[inline]
    #[must_use]
    pub const fn class(&self) -> SlotClass {
        self.class
    }

    /// `true` if this position consumes user-entered characters.
    #[inline]
    #[must_use]
    pub const fn is_editable(&self) -> bool {
        self.editable
    }

    /// The character shown while this slot is editable but unfilled.
    #[inline]
    #[must_use]
    pub const fn placeholder(&self) -> char {
        self.placeholder
    }

    /// Whether `c` may be stored in this slot.
    ///
    /// Always `false` for literals, including positions forced to literal by
    /// a hint even though their marker is reserved.
    #[must_use]
    pub fn accepts(&self, c: char) -> bool {
        self.editable && self.class.accepts(c)
    }
}
