//! The prefix key normalizer.
//!
//! An identifier is brought to exactly [`PREFIX_KEY_WIDTH`] characters and
//! then read as a base-10 integer:
//!
//! - shorter input is right-padded with `'0'`, so `"44"` becomes
//!   `"440000000000000"`
//! - longer input keeps only its first 15 characters; the rest is never read
//! - input of exactly 15 characters is used as is
//!
//! The work happens in a `[u8; 15]` on the stack. Nothing is allocated and
//! nothing past the 15th character is inspected, so the cost is O(15) for
//! any input length.
//!
//! Truncation is lossy. Two identifiers that agree on their first 15
//! characters produce the same key, which is what prefix grouping wants but
//! means a key must never stand in for the full identifier.

use std::fmt;
use std::ops::Deref;

use tracing::trace;

use crate::config::InvalidDigitPolicy;
use crate::error::PrefixKeyError;

/// Number of digits every identifier is padded or truncated to.
pub const PREFIX_KEY_WIDTH: usize = 15;

/// An identifier padded or truncated to [`PREFIX_KEY_WIDTH`] ASCII digits.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalDigits([u8; PREFIX_KEY_WIDTH]);

impl CanonicalDigits {
    /// Spells out `value` with leading zeros. Callers keep `value` below 10^15.
    pub(crate) fn from_value(mut value: u64) -> Self {
        let mut buf = [b'0'; PREFIX_KEY_WIDTH];
        for slot in buf.iter_mut().rev() {
            *slot = b'0' + (value % 10) as u8;
            value /= 10;
        }
        Self(buf)
    }

    pub fn as_str(&self) -> &str {
        // Always ASCII digits.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    pub fn as_bytes(&self) -> &[u8; PREFIX_KEY_WIDTH] {
        &self.0
    }

    /// Reads the digits as a base-10 integer. Leading zeros only shrink the value.
    pub fn value(&self) -> u64 {
        self.0
            .iter()
            .fold(0u64, |acc, &b| acc * 10 + u64::from(b - b'0'))
    }
}

impl Deref for CanonicalDigits {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for CanonicalDigits {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Debug for CanonicalDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CanonicalDigits").field(&self.as_str()).finish()
    }
}

impl fmt::Display for CanonicalDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pads or truncates `input` to [`PREFIX_KEY_WIDTH`] digits.
///
/// Positions in errors count characters, not bytes.
///
/// ```rust
/// use prefixkey::{canonical_digits, InvalidDigitPolicy};
///
/// let digits = canonical_digits("4420", InvalidDigitPolicy::Reject).unwrap();
/// assert_eq!(digits.as_str(), "442000000000000");
/// ```
pub fn canonical_digits(
    input: &str,
    policy: InvalidDigitPolicy,
) -> Result<CanonicalDigits, PrefixKeyError> {
    let mut buf = [b'0'; PREFIX_KEY_WIDTH];

    // `zip` stops once the buffer is full, so trailing characters are never read.
    for (position, (slot, ch)) in buf.iter_mut().zip(input.chars()).enumerate() {
        match ch {
            '0'..='9' => *slot = ch as u8,
            _ => match policy {
                InvalidDigitPolicy::Reject => {
                    trace!(position, found = ?ch, "prefix_key_rejected");
                    return Err(PrefixKeyError::InvalidDigit {
                        position,
                        found: ch,
                    });
                }
                // The slot already holds '0'.
                InvalidDigitPolicy::Zero => {}
            },
        }
    }

    Ok(CanonicalDigits(buf))
}

/// Computes the prefix key of `input`, rejecting non-digit characters.
///
/// ```rust
/// use prefixkey::prefix_key;
///
/// assert_eq!(prefix_key("").unwrap(), 0);
/// assert_eq!(prefix_key("1").unwrap(), 100_000_000_000_000);
/// assert_eq!(prefix_key("0000000000000019").unwrap(), 1);
/// assert!(prefix_key("12-34").is_err());
/// ```
pub fn prefix_key(input: &str) -> Result<u64, PrefixKeyError> {
    prefix_key_with(input, InvalidDigitPolicy::Reject)
}

/// Computes the prefix key of `input` under an explicit [`InvalidDigitPolicy`].
pub fn prefix_key_with(input: &str, policy: InvalidDigitPolicy) -> Result<u64, PrefixKeyError> {
    canonical_digits(input, policy).map(|digits| digits.value())
}
