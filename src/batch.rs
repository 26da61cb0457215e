//! Batch normalization.
//!
//! Each identifier is independent, so a batch is a plain map. With
//! `use_parallel` set the map runs on the rayon pool; results come back in
//! input order either way.

use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, Level};

use crate::config::PrefixKeyConfig;
use crate::error::PrefixKeyError;
use crate::key::PrefixKey;

/// Outcome counts for one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub ok: usize,
    pub rejected: usize,
}

impl BatchSummary {
    pub fn from_results(results: &[Result<PrefixKey, PrefixKeyError>]) -> Self {
        let ok = results.iter().filter(|r| r.is_ok()).count();
        Self {
            total: results.len(),
            ok,
            rejected: results.len() - ok,
        }
    }
}

/// Normalizes every input under `cfg`, one result per input.
///
/// ```rust
/// use prefixkey::{prefix_keys, PrefixKeyConfig};
///
/// let keys = prefix_keys(&["1", "x", "44"], &PrefixKeyConfig::default());
/// assert_eq!(keys[0].unwrap().get(), 100_000_000_000_000);
/// assert!(keys[1].is_err());
/// ```
pub fn prefix_keys<S>(inputs: &[S], cfg: &PrefixKeyConfig) -> Vec<Result<PrefixKey, PrefixKeyError>>
where
    S: AsRef<str> + Sync,
{
    let start = Instant::now();
    let span = tracing::span!(
        Level::INFO,
        "prefixkey.batch",
        total = inputs.len(),
        parallel = cfg.use_parallel
    );
    let _guard = span.enter();

    let policy = cfg.invalid_digit;
    let results: Vec<_> = if cfg.use_parallel {
        inputs
            .par_iter()
            .map(|input| PrefixKey::with_policy(input.as_ref(), policy))
            .collect()
    } else {
        inputs
            .iter()
            .map(|input| PrefixKey::with_policy(input.as_ref(), policy))
            .collect()
    };

    let summary = BatchSummary::from_results(&results);
    let elapsed_micros = start.elapsed().as_micros();
    info!(
        total = summary.total,
        ok = summary.ok,
        rejected = summary.rejected,
        elapsed_micros,
        "batch_complete"
    );

    results
}
