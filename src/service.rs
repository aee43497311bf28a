//! Menu Cache Service
//!
//! The core read-through operation: derive cache key(s) for a lookup,
//! resolve each against cache-then-upstream, and return the requested day's
//! payload. The dual-day variant also warms tomorrow's entry so a later
//! request for it is already cached.

use std::sync::Arc;

use chrono::{Days, NaiveDate};
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::cache::{derive_key, ttl_until_local_midnight, MenuStore};
use crate::error::{MenuError, Result};
use crate::models::{Day, LookupRequest};
use crate::upstream::MenuApiClient;

/// Date format used by the upstream API and the cache keys.
const DATE_FORMAT: &str = "%Y-%m-%d";

// == Day Pair ==
/// The two cache slots a lookup can touch: the requested date and the
/// following calendar day. The slots are independent entries with
/// independent TTLs; only the one-day offset relates them.
#[derive(Debug, Clone)]
pub struct DayPair {
    /// Cache key for the requested date
    pub today_key: String,
    /// The requested date, as given
    pub today_date: String,
    /// Cache key for the following day
    pub tomorrow_key: String,
    /// The following day, rendered as `YYYY-MM-DD`
    pub tomorrow_date: String,
}

impl DayPair {
    /// Derives both keys for a `(location, period?, date)` triple.
    ///
    /// The tomorrow date is the requested date shifted forward by exactly one
    /// calendar day, so month, year, and leap-day boundaries roll correctly.
    pub fn derive(location: &str, period: Option<&str>, date: &str) -> Result<Self> {
        let parsed = NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|_| MenuError::InvalidDate)?;
        let tomorrow = parsed
            .checked_add_days(Days::new(1))
            .ok_or(MenuError::InvalidDate)?;
        let tomorrow_date = tomorrow.format(DATE_FORMAT).to_string();

        Ok(Self {
            today_key: derive_key(location, period, date),
            today_date: date.to_string(),
            tomorrow_key: derive_key(location, period, &tomorrow_date),
            tomorrow_date,
        })
    }
}

// == Menu Cache Service ==
/// Read-through cache in front of the upstream menu API.
///
/// The store is injected at construction; each lookup is otherwise
/// stateless, so the service clones cheaply into handlers.
#[derive(Clone)]
pub struct MenuCacheService {
    store: Arc<RwLock<MenuStore>>,
    upstream: MenuApiClient,
}

impl MenuCacheService {
    /// Creates a new service over the given store and upstream client.
    pub fn new(store: Arc<RwLock<MenuStore>>, upstream: MenuApiClient) -> Self {
        Self { store, upstream }
    }

    // == Lookup ==
    /// Resolves a validated lookup and returns the requested day's payload.
    ///
    /// With `prefetch` set, both the requested date and the following day are
    /// resolved concurrently; a failure warming the non-requested slot never
    /// fails the request. Without it, only the requested day's slot is
    /// touched.
    pub async fn lookup(&self, request: &LookupRequest, prefetch: bool) -> Result<Value> {
        let pair = DayPair::derive(&request.location, request.period.as_deref(), &request.date)?;

        let selected = if prefetch {
            let (today, tomorrow) = tokio::join!(
                self.resolve(&pair.today_key, &pair.today_date, request),
                self.resolve(&pair.tomorrow_key, &pair.tomorrow_date, request),
            );
            match request.day {
                Day::Today => today,
                Day::Tomorrow => tomorrow,
            }
        } else {
            match request.day {
                Day::Today => self.resolve(&pair.today_key, &pair.today_date, request).await,
                Day::Tomorrow => {
                    self.resolve(&pair.tomorrow_key, &pair.tomorrow_date, request)
                        .await
                }
            }
        };

        selected.ok_or(MenuError::UpstreamUnavailable(request.day))
    }

    // == Resolve ==
    /// Resolves one cache slot: cache lookup, then upstream fetch on miss.
    ///
    /// A successful fetch is cached with a TTL running to the next local
    /// midnight from the current wall clock, whichever date the payload
    /// describes. Failures leave the slot empty and write nothing.
    async fn resolve(&self, key: &str, for_date: &str, request: &LookupRequest) -> Option<Value> {
        if let Some(value) = self.store.write().await.get(key) {
            debug!(key, "cache hit");
            return Some(value);
        }

        match self
            .upstream
            .fetch_menu(&request.location, request.period.as_deref(), for_date)
            .await
        {
            Ok(payload) => {
                let ttl = ttl_until_local_midnight();
                self.store
                    .write()
                    .await
                    .put(key.to_string(), payload.clone(), ttl);
                info!(key, ttl, "cached upstream payload");
                Some(payload)
            }
            Err(err) => {
                warn!(key, %err, "upstream fetch failed, slot left empty");
                None
            }
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_pair_keys() {
        let pair = DayPair::derive("coffman", Some("lunch"), "2024-03-10").unwrap();
        assert_eq!(pair.today_key, "menu:coffman:lunch:2024-03-10");
        assert_eq!(pair.tomorrow_key, "menu:coffman:lunch:2024-03-11");
        assert_eq!(pair.today_date, "2024-03-10");
        assert_eq!(pair.tomorrow_date, "2024-03-11");
    }

    #[test]
    fn test_day_pair_without_period() {
        let pair = DayPair::derive("coffman", None, "2024-03-10").unwrap();
        assert_eq!(pair.today_key, "periods:coffman:2024-03-10");
        assert_eq!(pair.tomorrow_key, "periods:coffman:2024-03-11");
    }

    #[test]
    fn test_day_pair_leap_year() {
        let pair = DayPair::derive("coffman", None, "2024-02-28").unwrap();
        assert_eq!(pair.tomorrow_date, "2024-02-29");

        let pair = DayPair::derive("coffman", None, "2023-02-28").unwrap();
        assert_eq!(pair.tomorrow_date, "2023-03-01");
    }

    #[test]
    fn test_day_pair_year_rollover() {
        let pair = DayPair::derive("coffman", None, "2024-12-31").unwrap();
        assert_eq!(pair.tomorrow_date, "2025-01-01");
    }

    #[test]
    fn test_day_pair_invalid_date() {
        assert_eq!(
            DayPair::derive("coffman", None, "2024-13-99").unwrap_err(),
            MenuError::InvalidDate
        );
        assert_eq!(
            DayPair::derive("coffman", None, "not-a-date").unwrap_err(),
            MenuError::InvalidDate
        );
    }
}
