//! Prefix keys for telephone-number-like identifiers.
//!
//! This crate turns a decimal digit string into a fixed-width `u64` that
//! sorts by dialing prefix. Numbering-plan and call-rating tables can use it
//! as their lookup key.
//!
//! ## What we do
//!
//! - Pad short identifiers with trailing zeros to 15 digits
//! - Truncate long identifiers to their first 15 digits
//! - Read the result as a base-10 integer
//! - Reject characters outside `'0'..='9'` (or read them as zero, if configured)
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no shared state. The same identifier and policy
//! give the same key on any machine and any thread. The hot path uses a
//! 15-byte stack buffer and never allocates.
//!
//! ## Invariants worth knowing
//!
//! - Every key is at most `999_999_999_999_999`
//! - `""` and any run of zeros map to `0`
//! - Only the first 15 characters are inspected; anything after is dropped
//! - Identifiers sharing their first 15 characters share a key, so a key is
//!   a grouping handle, not an identity
//! - Every identifier starting with prefix `P` lands in [`prefix_range`]`(P)`

mod batch;
mod config;
mod error;
mod key;
mod normalize;
mod range;

pub use crate::batch::{prefix_keys, BatchSummary};
pub use crate::config::{InvalidDigitPolicy, PrefixKeyConfig};
pub use crate::error::{ConfigLoadError, PrefixKeyError};
pub use crate::key::PrefixKey;
pub use crate::normalize::{
    canonical_digits, prefix_key, prefix_key_with, CanonicalDigits, PREFIX_KEY_WIDTH,
};
pub use crate::range::{prefix_range, prefix_range_with, PrefixRange};
