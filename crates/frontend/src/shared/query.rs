//! Key-gated remote list queries with per-key caching.
//!
//! Mirrors the fetch discipline of the source system: a query only runs
//! once its dependency key is present, results are cached per key and stay
//! fresh for five minutes, a failed fetch is retried once before the error
//! is surfaced, and placeholder data renders synchronously until the first
//! real result lands.

use std::collections::HashMap;
use std::future::Future;

use contracts::domain::{Country, Good, Port};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;

/// Cached results are considered fresh for five minutes.
pub const STALE_AFTER_MS: f64 = 5.0 * 60.0 * 1000.0;

/// Pause before the single automatic retry.
const RETRY_DELAY_MS: u32 = 300;

struct CacheEntry<T> {
    data: Vec<T>,
    fetched_at_ms: f64,
}

/// Per-query cache keyed by the dependency value. Freshness is decided
/// against a caller-supplied clock so the policy is testable off-wasm.
pub struct QueryCache<T> {
    entries: HashMap<i64, CacheEntry<T>>,
}

impl<T: Clone> QueryCache<T> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Cached data for `key` if it is still inside the staleness window.
    pub fn fresh(&self, key: i64, now_ms: f64) -> Option<Vec<T>> {
        self.entries
            .get(&key)
            .filter(|entry| now_ms - entry.fetched_at_ms < STALE_AFTER_MS)
            .map(|entry| entry.data.clone())
    }

    pub fn insert(&mut self, key: i64, data: Vec<T>, now_ms: f64) {
        self.entries.insert(
            key,
            CacheEntry {
                data,
                fetched_at_ms: now_ms,
            },
        );
    }
}

impl<T: Clone> Default for QueryCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// What to do for the current dependency key.
#[derive(Debug, PartialEq)]
enum CacheDecision<T> {
    /// No key yet: stay idle on the placeholder.
    Idle,
    /// Fresh cached rows for this key.
    Hit(Vec<T>),
    /// No fresh entry: fetch, showing the placeholder meanwhile.
    Miss(i64),
}

fn decide<T: Clone>(key: Option<i64>, cache: &QueryCache<T>, now_ms: f64) -> CacheDecision<T> {
    match key {
        None => CacheDecision::Idle,
        Some(k) => match cache.fresh(k, now_ms) {
            Some(data) => CacheDecision::Hit(data),
            None => CacheDecision::Miss(k),
        },
    }
}

/// Run `fetch` for `key`, retrying once after `pause` on failure. The
/// first error is swallowed; only the second one is returned.
async fn fetch_with_retry<T, F, Fut, P, PFut>(key: i64, fetch: F, pause: P) -> Result<Vec<T>, String>
where
    F: Fn(i64) -> Fut,
    Fut: Future<Output = Result<Vec<T>, String>>,
    P: FnOnce() -> PFut,
    PFut: Future<Output = ()>,
{
    match fetch(key).await {
        Ok(items) => Ok(items),
        Err(_) => {
            pause().await;
            fetch(key).await
        }
    }
}

/// Signals exposed by one remote list query.
pub struct QueryResult<T: Send + Sync + 'static> {
    /// Resolved data, or the placeholder until the first resolution.
    pub data: Signal<Vec<T>>,
    pub is_loading: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,
}

impl<T: Send + Sync + 'static> Clone for QueryResult<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for QueryResult<T> {}

/// Run `fetch` whenever `key` holds a value that has no fresh cache entry.
///
/// While `key` is `None` the query stays idle and `data` keeps returning
/// the placeholder. A failed fetch is retried once after a short pause;
/// only the second failure reaches `error`. There is no cancellation: a
/// response for a superseded key still resolves and lands in that key's
/// cache slot, which the next lookup for the key absorbs.
pub fn use_remote_list<T, F, Fut>(
    key: Signal<Option<i64>>,
    placeholder: Vec<T>,
    fetch: F,
) -> QueryResult<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
    F: Fn(i64) -> Fut + Copy + 'static,
    Fut: Future<Output = Result<Vec<T>, String>> + 'static,
{
    let (resolved, set_resolved) = signal::<Option<Vec<T>>>(None);
    let (is_loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let cache = StoredValue::new(QueryCache::<T>::new());

    Effect::new(move |_| {
        let decision = cache.with_value(|c| decide(key.get(), c, js_sys::Date::now()));
        match decision {
            CacheDecision::Idle => {
                set_resolved.set(None);
                set_loading.set(false);
                set_error.set(None);
            }
            CacheDecision::Hit(items) => {
                set_resolved.set(Some(items));
                set_loading.set(false);
                set_error.set(None);
            }
            CacheDecision::Miss(k) => {
                // the previous key's rows must not linger; back to the
                // placeholder until this key's fetch lands
                set_resolved.set(None);
                set_loading.set(true);
                set_error.set(None);

                spawn_local(async move {
                    let result =
                        fetch_with_retry(k, fetch, || TimeoutFuture::new(RETRY_DELAY_MS)).await;

                    match result {
                        Ok(items) => {
                            cache.update_value(|c| c.insert(k, items.clone(), js_sys::Date::now()));
                            set_resolved.set(Some(items));
                            set_error.set(None);
                        }
                        Err(e) => set_error.set(Some(e)),
                    }
                    set_loading.set(false);
                });
            }
        }
    });

    let data = Signal::derive(move || resolved.get().unwrap_or_else(|| placeholder.clone()));

    QueryResult {
        data,
        is_loading,
        error,
    }
}

/// Country list. Always enabled; the placeholder keeps the form usable
/// before (or instead of) the first successful fetch.
pub fn use_countries() -> QueryResult<Country> {
    let placeholder = vec![
        Country {
            id: 1,
            nama: "Indonesia".to_string(),
        },
        Country {
            id: 2,
            nama: "Malaysia".to_string(),
        },
        Country {
            id: 3,
            nama: "Singapore".to_string(),
        },
    ];
    use_remote_list(Signal::derive(|| Some(0)), placeholder, |_| {
        api::fetch_countries()
    })
}

/// Ports of the selected country; idle until a country is picked.
pub fn use_ports(country_id: Signal<Option<i64>>) -> QueryResult<Port> {
    use_remote_list(country_id, Vec::new(), api::fetch_ports)
}

/// Goods of the selected port; idle until a port is picked.
pub fn use_goods(port_id: Signal<Option<i64>>) -> QueryResult<Good> {
    use_remote_list(port_id, Vec::new(), api::fetch_goods)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::task::{Context, Poll, Waker};

    /// Drives a future that never actually suspends (all test fetches and
    /// pauses resolve immediately) to completion in a single poll.
    fn block_on_ready<F: Future>(fut: F) -> F::Output {
        let mut fut = std::pin::pin!(fut);
        let mut cx = Context::from_waker(Waker::noop());
        match fut.as_mut().poll(&mut cx) {
            Poll::Ready(value) => value,
            Poll::Pending => panic!("future did not resolve synchronously"),
        }
    }

    #[test]
    fn test_failing_fetch_is_attempted_exactly_twice() {
        let calls = Cell::new(0u32);
        let result: Result<Vec<i64>, String> = block_on_ready(fetch_with_retry(
            7,
            |_| {
                calls.set(calls.get() + 1);
                let attempt = calls.get();
                async move { Err(format!("HTTP error! status: 500 (attempt {})", attempt)) }
            },
            || async {},
        ));
        assert_eq!(calls.get(), 2);
        assert_eq!(
            result.unwrap_err(),
            "HTTP error! status: 500 (attempt 2)"
        );
    }

    #[test]
    fn test_successful_fetch_is_not_retried() {
        let calls = Cell::new(0u32);
        let result = block_on_ready(fetch_with_retry(
            7,
            |key| {
                calls.set(calls.get() + 1);
                async move { Ok(vec![key]) }
            },
            || async {},
        ));
        assert_eq!(calls.get(), 1);
        assert_eq!(result, Ok(vec![7]));
    }

    #[test]
    fn test_retry_recovers_from_a_single_failure() {
        let calls = Cell::new(0u32);
        let result = block_on_ready(fetch_with_retry(
            7,
            |key| {
                calls.set(calls.get() + 1);
                let attempt = calls.get();
                async move {
                    if attempt == 1 {
                        Err("HTTP error! status: 500".to_string())
                    } else {
                        Ok(vec![key])
                    }
                }
            },
            || async {},
        ));
        assert_eq!(calls.get(), 2);
        assert_eq!(result, Ok(vec![7]));
    }

    #[test]
    fn test_decide_idle_without_key() {
        let cache: QueryCache<i64> = QueryCache::new();
        assert_eq!(decide(None, &cache, 0.0), CacheDecision::Idle);
    }

    #[test]
    fn test_decide_serves_fresh_cache() {
        let mut cache = QueryCache::new();
        cache.insert(1, vec!["a"], 0.0);
        assert_eq!(decide(Some(1), &cache, 1.0), CacheDecision::Hit(vec!["a"]));
    }

    #[test]
    fn test_new_key_refetches_and_drops_previous_rows() {
        let mut cache = QueryCache::new();
        cache.insert(1, vec!["ports of 1"], 0.0);
        // key change: the old key's rows are not shown for the new key,
        // the placeholder takes over until the fetch lands
        assert_eq!(decide(Some(2), &cache, 1.0), CacheDecision::Miss(2));
    }

    #[test]
    fn test_fresh_within_window() {
        let mut cache = QueryCache::new();
        cache.insert(1, vec!["a", "b"], 1_000.0);
        assert_eq!(cache.fresh(1, 1_000.0 + STALE_AFTER_MS - 1.0), Some(vec!["a", "b"]));
    }

    #[test]
    fn test_stale_after_window() {
        let mut cache = QueryCache::new();
        cache.insert(1, vec!["a"], 1_000.0);
        assert_eq!(cache.fresh(1, 1_000.0 + STALE_AFTER_MS), None);
    }

    #[test]
    fn test_keys_are_independent() {
        let mut cache = QueryCache::new();
        cache.insert(1, vec!["ports of 1"], 0.0);
        assert_eq!(cache.fresh(2, 1.0), None);
        cache.insert(2, vec!["ports of 2"], 1.0);
        assert_eq!(cache.fresh(1, 2.0), Some(vec!["ports of 1"]));
        assert_eq!(cache.fresh(2, 2.0), Some(vec!["ports of 2"]));
    }

    #[test]
    fn test_insert_refreshes_entry() {
        let mut cache = QueryCache::new();
        cache.insert(1, vec!["old"], 0.0);
        cache.insert(1, vec!["new"], STALE_AFTER_MS * 2.0);
        assert_eq!(cache.fresh(1, STALE_AFTER_MS * 2.0 + 1.0), Some(vec!["new"]));
    }
}
