use crate::config::Config;
use crate::models::error::AppError;
use crate::services::api::AemoClient;
use crate::services::endpoints::{Endpoint, QueryKey};
use crate::services::retry::{RetryPolicy, retry_with_backoff};
use chrono::{DateTime, Duration, Utc};
use futures::future::{FutureExt, LocalBoxFuture, Shared};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

type RawResult = Result<Rc<Value>, AppError>;
type InFlight = Shared<LocalBoxFuture<'static, RawResult>>;

/// Per-query caching and refresh behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// How long a cached payload is served without refetching.
    pub stale_time_ms: u32,
    /// Background refetch period while the query is mounted.
    pub refetch_interval_ms: Option<u32>,
    pub retry: RetryPolicy,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            stale_time_ms: Config::STALE_TIME_MS,
            refetch_interval_ms: None,
            retry: RetryPolicy::default(),
        }
    }
}

impl QueryOptions {
    pub fn live() -> Self {
        Self {
            refetch_interval_ms: Config::ENABLE_AUTO_REFRESH.then_some(Config::LIVE_REFRESH_MS),
            ..Self::default()
        }
    }

    pub fn historical() -> Self {
        Self {
            stale_time_ms: Config::HISTORICAL_STALE_TIME_MS,
            ..Self::default()
        }
    }
}

/// A data-domain query: which endpoint to call and how to normalize it.
pub trait Query: Clone + PartialEq + 'static {
    type Output: PartialEq + 'static;

    fn endpoint(&self) -> Endpoint;

    /// Pure transformation of the raw payload.
    fn select(&self, raw: &Value) -> Self::Output;

    fn options(&self) -> QueryOptions {
        QueryOptions::default()
    }
}

struct CacheEntry {
    value: Rc<Value>,
    fetched_at: DateTime<Utc>,
}

/// In-memory raw payload cache keyed by endpoint and parameters.
///
/// Single-threaded: all state sits behind `RefCell`s and no borrow is held
/// across an await point. Writes replace an entry wholesale, and concurrent
/// requests for one key share a single in-flight fetch.
#[derive(Default)]
pub struct QueryCache {
    entries: RefCell<HashMap<QueryKey, CacheEntry>>,
    in_flight: RefCell<HashMap<QueryKey, InFlight>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached payload, regardless of age.
    pub fn get(&self, key: &QueryKey) -> Option<Rc<Value>> {
        self.entries.borrow().get(key).map(|e| e.value.clone())
    }

    /// Cached payload younger than `stale_time` at `now`.
    pub fn get_fresh(&self, key: &QueryKey, stale_time: Duration, now: DateTime<Utc>) -> Option<Rc<Value>> {
        self.entries
            .borrow()
            .get(key)
            .filter(|e| now - e.fetched_at < stale_time)
            .map(|e| e.value.clone())
    }

    pub fn set(&self, key: QueryKey, value: Rc<Value>) {
        self.entries.borrow_mut().insert(
            key,
            CacheEntry {
                value,
                fetched_at: Utc::now(),
            },
        );
    }

    pub fn invalidate(&self, key: &QueryKey) {
        self.entries.borrow_mut().remove(key);
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.borrow().len()
    }

    /// Returns the fresh cached payload for `key`, joins an in-flight fetch
    /// for it, or starts one with `fetcher`.
    pub async fn fetch<F, Fut>(&self, key: QueryKey, stale_time: Duration, fetcher: F) -> RawResult
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value, AppError>> + 'static,
    {
        if let Some(hit) = self.get_fresh(&key, stale_time, Utc::now()) {
            tracing::debug!(key = %key, "cache hit");
            return Ok(hit);
        }

        let pending = {
            let mut in_flight = self.in_flight.borrow_mut();
            match in_flight.get(&key) {
                Some(pending) => {
                    tracing::debug!(key = %key, "joining in-flight request");
                    pending.clone()
                }
                None => {
                    let pending = fetcher().map(|r| r.map(Rc::new)).boxed_local().shared();
                    in_flight.insert(key.clone(), pending.clone());
                    pending
                }
            }
        };

        let result = pending.clone().await;

        {
            let mut in_flight = self.in_flight.borrow_mut();
            if in_flight.get(&key).is_some_and(|current| current.ptr_eq(&pending)) {
                in_flight.remove(&key);
                if let Ok(value) = &result {
                    self.set(key, value.clone());
                }
            }
        }

        result
    }
}

/// Gateway plus cache: the entry point for every data-domain query.
pub struct QueryClient {
    api: AemoClient,
    cache: QueryCache,
}

impl QueryClient {
    pub fn new(api: AemoClient) -> Self {
        Self {
            api,
            cache: QueryCache::new(),
        }
    }

    pub fn api(&self) -> &AemoClient {
        &self.api
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Fetches (or reuses) the raw payload and normalizes it.
    pub async fn fetch<Q: Query>(&self, query: &Q) -> Result<Q::Output, AppError> {
        let endpoint = query.endpoint();
        let options = query.options();
        let api = self.api.clone();

        let raw = self
            .cache
            .fetch(
                endpoint.key(),
                Duration::milliseconds(i64::from(options.stale_time_ms)),
                move || async move {
                    retry_with_backoff(|| api.fetch_endpoint(&endpoint), options.retry).await
                },
            )
            .await?;

        Ok(query.select(&raw))
    }

    /// Drops the cached payload so the next fetch goes upstream.
    pub fn invalidate<Q: Query>(&self, query: &Q) {
        self.cache.invalidate(&query.endpoint().key());
    }
}

/// Shared handle handed down through the component tree.
#[derive(Clone)]
pub struct QueryClientHandle(pub Rc<QueryClient>);

impl QueryClientHandle {
    pub fn new(client: QueryClient) -> Self {
        Self(Rc::new(client))
    }
}

impl std::ops::Deref for QueryClientHandle {
    type Target = QueryClient;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for QueryClientHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
