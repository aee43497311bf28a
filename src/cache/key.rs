//! Cache Key Module
//!
//! Maps a lookup's parameters to its cache key.

// == Derive Key ==
/// Derives the cache key for a `(location, period?, date)` triple.
///
/// Two forms, matching any pre-existing cache contents exactly:
/// - With a period: `menu:{location}:{period}:{date}` — one period's menu.
/// - Without: `periods:{location}:{date}` — the full period list for that day.
///
/// Inputs are used as provided (case-sensitive, no normalization), so the
/// derivation is pure: equal inputs always yield equal keys.
pub fn derive_key(location: &str, period: Option<&str>, date: &str) -> String {
    match period {
        Some(period) => format!("menu:{}:{}:{}", location, period, date),
        None => format!("periods:{}:{}", location, date),
    }
}
