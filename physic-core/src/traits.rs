//! Core traits for quantities
//!
//! Two small traits: [`Quantity`] ties a typed newtype to its
//! [`QuantityKind`], and [`TextValue`] is the text capability used by flag
//! and configuration layers. Every `Quantity` gets `TextValue` for free.

use crate::errors::{ParseError, ParseResult};
use crate::format::FormattedValue;
use crate::registry::QuantityKind;

/// Typed wrapper around an integer count of storage units
pub trait Quantity: Copy {
    /// Kind whose registry row drives parsing and formatting
    const KIND: QuantityKind;

    /// Wrap a raw storage value; `None` when it does not fit the type
    fn from_base(raw: i64) -> Option<Self>;

    /// Raw storage value
    fn base(self) -> i64;

    /// Parse text with this kind's grammar
    fn parse_text(text: &str) -> ParseResult<Self> {
        let raw = Self::KIND.parse(text)?;
        Self::from_base(raw).ok_or(ParseError::Overflow)
    }

    /// Render with this kind's notation
    fn format(self) -> FormattedValue {
        Self::KIND.format(self.base())
    }
}

/// Anything that can be assigned from and rendered to text.
///
/// A failed assignment leaves the target untouched.
pub trait TextValue {
    /// Replace the current value with the one parsed from `text`
    fn set_from_text(&mut self, text: &str) -> ParseResult<()>;

    /// Render the current value
    fn format_to_text(&self) -> FormattedValue;
}

impl<Q: Quantity> TextValue for Q {
    fn set_from_text(&mut self, text: &str) -> ParseResult<()> {
        *self = Q::parse_text(text)?;
        Ok(())
    }

    fn format_to_text(&self) -> FormattedValue {
        Quantity::format(*self)
    }
}
