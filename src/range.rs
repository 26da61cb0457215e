//! Key ranges covered by a dialing prefix.
//!
//! Padding with zeros keeps prefixes contiguous: every identifier that starts
//! with `"44"` has a key in `[440000000000000, 449999999999999]`. A lookup
//! table sorted by [`PrefixKey`] can therefore answer "everything under this
//! prefix" with one range scan.

use serde::Serialize;

use crate::config::InvalidDigitPolicy;
use crate::error::PrefixKeyError;
use crate::key::PrefixKey;
use crate::normalize::{canonical_digits, PREFIX_KEY_WIDTH};

/// Inclusive interval of keys reachable from one dialing prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PrefixRange {
    start: PrefixKey,
    end: PrefixKey,
    prefix_len: usize,
}

impl PrefixRange {
    pub fn start(&self) -> PrefixKey {
        self.start
    }

    pub fn end(&self) -> PrefixKey {
        self.end
    }

    /// Number of prefix characters that took part, at most 15.
    pub fn prefix_len(&self) -> usize {
        self.prefix_len
    }

    pub fn contains(&self, key: PrefixKey) -> bool {
        self.start <= key && key <= self.end
    }

    /// True if every key of `other` also lies in `self`, i.e. `self`'s
    /// prefix is a prefix of `other`'s.
    pub fn contains_range(&self, other: &PrefixRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    pub fn len(&self) -> u64 {
        self.end.get() - self.start.get() + 1
    }

    /// Always false; even a full-width prefix covers one key.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Returns the keys reachable from `prefix`, rejecting non-digit characters.
///
/// ```rust
/// use prefixkey::{prefix_range, PrefixKey};
///
/// let uk = prefix_range("44").unwrap();
/// assert_eq!(uk.start().get(), 440_000_000_000_000);
/// assert_eq!(uk.end().get(), 449_999_999_999_999);
/// assert!(uk.contains(PrefixKey::new("442079460000").unwrap()));
/// ```
pub fn prefix_range(prefix: &str) -> Result<PrefixRange, PrefixKeyError> {
    prefix_range_with(prefix, InvalidDigitPolicy::Reject)
}

pub fn prefix_range_with(
    prefix: &str,
    policy: InvalidDigitPolicy,
) -> Result<PrefixRange, PrefixKeyError> {
    let digits = canonical_digits(prefix, policy)?;
    let prefix_len = prefix.chars().take(PREFIX_KEY_WIDTH).count();
    let span = 10u64.pow((PREFIX_KEY_WIDTH - prefix_len) as u32);
    let start = digits.value();

    Ok(PrefixRange {
        start: PrefixKey::from_canonical(start),
        end: PrefixKey::from_canonical(start + span - 1),
        prefix_len,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_prefix_covers_everything() {
        let all = prefix_range("").expect("range");
        assert_eq!(all.start(), PrefixKey::default());
        assert_eq!(all.end(), PrefixKey::MAX);
        assert_eq!(all.len(), 1_000_000_000_000_000);
        assert_eq!(all.prefix_len(), 0);
    }

    #[test]
    fn full_width_prefix_is_single_key() {
        let one = prefix_range("123456789012345").expect("range");
        assert_eq!(one.start(), one.end());
        assert_eq!(one.len(), 1);
        assert!(!one.is_empty());
    }

    #[test]
    fn overlong_prefix_is_truncated() {
        let long = prefix_range("1234567890123456789").expect("range");
        let exact = prefix_range("123456789012345").expect("range");
        assert_eq!(long, exact);
    }

    #[test]
    fn identifiers_fall_inside_their_prefix() {
        let range = prefix_range("3906").expect("range");
        for number in ["3906", "39061", "390669", "390612345678901234"] {
            let key = PrefixKey::new(number).expect("key");
            assert!(range.contains(key), "{number} outside {range:?}");
        }
        for number in ["3907", "390", "4", ""] {
            let key = PrefixKey::new(number).expect("key");
            assert!(!range.contains(key), "{number} inside {range:?}");
        }
    }

    #[test]
    fn nested_prefixes() {
        let country = prefix_range("44").expect("range");
        let city = prefix_range("4420").expect("range");
        let other = prefix_range("45").expect("range");

        assert!(country.contains_range(&city));
        assert!(!city.contains_range(&country));
        assert!(!country.contains_range(&other));
    }

    #[test]
    fn zero_policy_applies_to_prefix() {
        let range = prefix_range_with("4x", InvalidDigitPolicy::Zero).expect("range");
        assert_eq!(range, prefix_range("40").expect("range"));
        assert!(prefix_range("4x").is_err());
    }
}
