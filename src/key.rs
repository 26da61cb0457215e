use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::InvalidDigitPolicy;
use crate::error::PrefixKeyError;
use crate::normalize::{canonical_digits, CanonicalDigits};

/// A normalized prefix key.
///
/// Keys sort the same way as their 15-digit canonical form, so a table keyed
/// by `PrefixKey` is ordered by dialing prefix. A key is lossy: identifiers
/// longer than 15 characters that share their first 15 characters have the
/// same key. Use it for prefix lookup and grouping, never as an identity.
///
/// Serializes as a bare integer. Deserializing a value above
/// [`PrefixKey::MAX`] fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u64", try_from = "u64")]
pub struct PrefixKey(u64);

impl PrefixKey {
    /// Largest key: fifteen nines.
    pub const MAX: PrefixKey = PrefixKey(999_999_999_999_999);

    /// Normalizes `input`, rejecting non-digit characters.
    pub fn new(input: &str) -> Result<Self, PrefixKeyError> {
        Self::with_policy(input, InvalidDigitPolicy::Reject)
    }

    pub fn with_policy(input: &str, policy: InvalidDigitPolicy) -> Result<Self, PrefixKeyError> {
        canonical_digits(input, policy).map(|digits| Self(digits.value()))
    }

    /// Wraps an already computed key, or `None` if it exceeds [`PrefixKey::MAX`].
    pub fn from_u64(value: u64) -> Option<Self> {
        (value <= Self::MAX.0).then_some(Self(value))
    }

    pub(crate) fn from_canonical(value: u64) -> Self {
        debug_assert!(value <= Self::MAX.0);
        Self(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// The 15-digit zero-padded form. Normalizing it again yields `self`.
    pub fn digits(self) -> CanonicalDigits {
        CanonicalDigits::from_value(self.0)
    }
}

impl From<PrefixKey> for u64 {
    fn from(key: PrefixKey) -> u64 {
        key.0
    }
}

impl TryFrom<u64> for PrefixKey {
    type Error = PrefixKeyError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::from_u64(value).ok_or(PrefixKeyError::OutOfRange(value))
    }
}

impl FromStr for PrefixKey {
    type Err = PrefixKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for PrefixKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:015}", self.0)
    }
}
