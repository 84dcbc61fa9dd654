//! Calculation cache
//!
//! Memoizes [`process_parameters`] keyed by a SHA-256 of the canonical JSON
//! of its inputs. Results are identical to uncached calls. Bounded: a full
//! cache is cleared before the next insert.

use dashmap::DashMap;
use sha2::{Digest, Sha256};
use shared::AppResult;
use shared::models::{ParameterSet, Position};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::calc::processing::{ProcessedParameters, process_parameters};
use crate::core::EngineConfig;

/// Hex SHA-256 over the JSON of the parameter set, catalog and config
///
/// Maps are ordered (`BTreeMap`) so equal inputs always serialize the same.
pub fn calculation_key(
    params: &ParameterSet,
    positions: &[Position],
    config: &EngineConfig,
) -> AppResult<String> {
    let mut hasher = Sha256::new();
    hasher.update(serde_json::to_vec(params)?);
    hasher.update(b"\n");
    hasher.update(serde_json::to_vec(positions)?);
    hasher.update(b"\n");
    hasher.update(serde_json::to_vec(config)?);
    Ok(hex::encode(hasher.finalize()))
}

/// Entries kept before the cache starts over
pub const DEFAULT_MAX_ENTRIES: usize = 1024;

/// Thread-safe memo of processed parameter sets
#[derive(Debug)]
pub struct CalculationCache {
    entries: DashMap<String, ProcessedParameters>,
    max_entries: usize,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl Default for CalculationCache {
    fn default() -> Self {
        Self::with_max_entries(DEFAULT_MAX_ENTRIES)
    }
}

/// Cache counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

impl CalculationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            entries: DashMap::new(),
            max_entries: max_entries.max(1),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Cached result, computing and storing it on a miss
    pub fn get_or_compute(
        &self,
        params: &ParameterSet,
        positions: &[Position],
        config: &EngineConfig,
    ) -> AppResult<ProcessedParameters> {
        let key = calculation_key(params, positions, config)?;

        if let Some(hit) = self.entries.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::trace!(target: "calc", key = %key, "Calculation cache hit");
            return Ok(hit.clone());
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let processed = process_parameters(params, positions, config);
        if self.entries.len() >= self.max_entries {
            tracing::debug!(
                target: "calc",
                entries = self.entries.len(),
                "Calculation cache full, clearing"
            );
            self.entries.clear();
        }
        self.entries.insert(key, processed.clone());
        Ok(processed)
    }

    /// Drop the entry for these inputs; true when one was cached
    pub fn evict(
        &self,
        params: &ParameterSet,
        positions: &[Position],
        config: &EngineConfig,
    ) -> AppResult<bool> {
        let key = calculation_key(params, positions, config)?;
        Ok(self.entries.remove(&key).is_some())
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}
