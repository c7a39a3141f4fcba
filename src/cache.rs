//! Parsed pattern caching.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Mutex, PoisonError};

use crate::ast::Pattern;
use crate::error::ParseError;

/// Global cache for parsed patterns.
static CACHE: Mutex<Option<LruCache<String, Pattern>>> = Mutex::new(None);

const CACHE_SIZE: NonZeroUsize = match NonZeroUsize::new(100) {
    Some(size) => size,
    None => panic!("cache size must be non-zero"),
};

/// Get or parse a pattern, using the cache.
pub fn get_or_parse(pattern: &str) -> Result<Pattern, ParseError> {
    let mut cache_guard = CACHE.lock().unwrap_or_else(PoisonError::into_inner);

    let cache = cache_guard.get_or_insert_with(|| LruCache::new(CACHE_SIZE));

    if let Some(parsed) = cache.get(pattern) {
        return Ok(parsed.clone());
    }

    let parsed = Pattern::parse(pattern)?;
    cache.put(pattern.to_string(), parsed.clone());
    Ok(parsed)
}
