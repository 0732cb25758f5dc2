//! Stale-while-revalidate 缓存
//!
//! 每个 key 保存最近一次成功的值、最近一次错误和请求序号。每次请求分配一个
//! 单调递增的序号，只有最新序号的结果会被采纳，较早发出但较晚返回的结果被丢弃。
//! 重新验证期间旧值保持可见；请求失败时旧值保留，错误单独暴露。

use std::future::Future;
use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::watch;
use tracing::{debug, trace};

use crate::errors::{LinkshortError, Result};

struct Entry<V> {
    value: Option<Arc<V>>,
    error: Option<LinkshortError>,
    issued_seq: u64,
    resolved_seq: u64,
    /// 被显式失效，下次 observe 时重新请求
    stale: bool,
    version: watch::Sender<u64>,
}

impl<V> Entry<V> {
    fn new() -> Self {
        let (version, _) = watch::channel(0);
        Self {
            value: None,
            error: None,
            issued_seq: 0,
            resolved_seq: 0,
            stale: false,
            version,
        }
    }

    fn in_flight(&self) -> bool {
        self.issued_seq > self.resolved_seq
    }

    fn notify(&self) {
        self.version.send_modify(|v| *v = v.wrapping_add(1));
    }

    fn snapshot(&self) -> Snapshot<V> {
        Snapshot {
            value: self.value.clone(),
            error: self.error.clone(),
            validating: self.in_flight(),
        }
    }
}

/// 某个 key 在某一时刻的状态
#[derive(Debug)]
pub struct Snapshot<V> {
    pub value: Option<Arc<V>>,
    pub error: Option<LinkshortError>,
    /// 有请求在进行中
    pub validating: bool,
}

impl<V> Clone for Snapshot<V> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            error: self.error.clone(),
            validating: self.validating,
        }
    }
}

impl<V> Default for Snapshot<V> {
    fn default() -> Self {
        Self {
            value: None,
            error: None,
            validating: false,
        }
    }
}

struct Inner<V> {
    entries: DashMap<String, Entry<V>>,
}

/// 按 key 寻址的 SWR 缓存，克隆后共享同一份数据
pub struct SwrCache<V> {
    inner: Arc<Inner<V>>,
}

impl<V> Clone for SwrCache<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V> Default for SwrCache<V> {
    fn default() -> Self {
        Self {
            inner: Arc::new(Inner {
                entries: DashMap::new(),
            }),
        }
    }
}

impl<V: Send + Sync + 'static> SwrCache<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self, key: &str) -> Snapshot<V> {
        self.inner
            .entries
            .get(key)
            .map(|entry| entry.snapshot())
            .unwrap_or_default()
    }

    /// 订阅 key 的变更，每次状态变化版本号加一
    pub fn subscribe(&self, key: &str) -> watch::Receiver<u64> {
        self.inner
            .entries
            .entry(key.to_string())
            .or_insert_with(Entry::new)
            .version
            .subscribe()
    }

    /// 为 key 分配新的请求序号
    pub fn begin(&self, key: &str) -> u64 {
        let mut entry = self
            .inner
            .entries
            .entry(key.to_string())
            .or_insert_with(Entry::new);
        entry.issued_seq += 1;
        entry.notify();
        trace!("Cache key {} issued seq {}", key, entry.issued_seq);
        entry.issued_seq
    }

    /// 写入请求结果
    ///
    /// `seq` 不是该 key 最新发出的序号时丢弃并返回 `false`。
    pub fn resolve(&self, key: &str, seq: u64, result: Result<V>) -> bool {
        self.resolve_shared(key, seq, result.map(Arc::new))
    }

    fn resolve_shared(&self, key: &str, seq: u64, result: Result<Arc<V>>) -> bool {
        let Some(mut entry) = self.inner.entries.get_mut(key) else {
            debug!("Discarding result for unknown cache key {}", key);
            return false;
        };
        if seq != entry.issued_seq {
            debug!(
                "Discarding out-of-order result for {} (seq {}, latest {})",
                key, seq, entry.issued_seq
            );
            return false;
        }

        entry.resolved_seq = seq;
        entry.stale = false;
        match result {
            Ok(value) => {
                entry.value = Some(value);
                entry.error = None;
            }
            Err(e) => {
                debug!("Fetch for {} failed: {}", key, e);
                entry.error = Some(e);
            }
        }
        entry.notify();
        true
    }

    /// 标记为失效，旧值继续可见，下次 observe 时重新请求
    pub fn invalidate(&self, key: &str) {
        if let Some(mut entry) = self.inner.entries.get_mut(key) {
            entry.stale = true;
            entry.notify();
        }
    }

    /// 读取 key 当前状态，首次访问或已失效时在后台发起请求
    ///
    /// 已有请求在进行中时不会重复发起。
    pub fn observe<F, Fut>(&self, key: &str, fetch: F) -> Snapshot<V>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V>> + Send + 'static,
    {
        let needs_fetch = {
            let entry = self
                .inner
                .entries
                .entry(key.to_string())
                .or_insert_with(Entry::new);
            !entry.in_flight() && (entry.issued_seq == 0 || entry.stale)
        };
        if needs_fetch {
            self.spawn_fetch(key, fetch());
        }
        self.snapshot(key)
    }

    /// 无条件在后台重新请求，新请求会取代仍在进行中的旧请求
    pub fn revalidate<F, Fut>(&self, key: &str, fetch: F)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V>> + Send + 'static,
    {
        self.spawn_fetch(key, fetch());
    }

    /// 发起请求并等待结果，结果同样写入缓存
    ///
    /// 即使结果因为更新的请求而被丢弃，调用方仍拿到自己的结果。
    pub async fn fetch_now<Fut>(&self, key: &str, fetch: Fut) -> Result<Arc<V>>
    where
        Fut: Future<Output = Result<V>>,
    {
        let seq = self.begin(key);
        match fetch.await {
            Ok(value) => {
                let value = Arc::new(value);
                self.resolve_shared(key, seq, Ok(Arc::clone(&value)));
                Ok(value)
            }
            Err(e) => {
                self.resolve_shared(key, seq, Err(e.clone()));
                Err(e)
            }
        }
    }

    fn spawn_fetch<Fut>(&self, key: &str, fetch: Fut)
    where
        Fut: Future<Output = Result<V>> + Send + 'static,
    {
        let seq = self.begin(key);
        let cache = self.clone();
        let key = key.to_string();
        tokio::spawn(async move {
            let result = fetch.await;
            cache.resolve(&key, seq, result);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_snapshot() {
        let cache: SwrCache<u32> = SwrCache::new();
        let snapshot = cache.snapshot("/nothing");
        assert!(snapshot.value.is_none());
        assert!(snapshot.error.is_none());
        assert!(!snapshot.validating);
    }

    #[test]
    fn test_latest_sequence_wins() {
        let cache: SwrCache<u32> = SwrCache::new();
        let first = cache.begin("k");
        let second = cache.begin("k");

        assert!(cache.resolve("k", second, Ok(2)));
        assert!(!cache.resolve("k", first, Ok(1)));
        assert_eq!(cache.snapshot("k").value.as_deref(), Some(&2));
    }

    #[test]
    fn test_older_result_discarded_while_newer_in_flight() {
        let cache: SwrCache<u32> = SwrCache::new();
        let first = cache.begin("k");
        let _second = cache.begin("k");

        assert!(!cache.resolve("k", first, Ok(1)));
        let snapshot = cache.snapshot("k");
        assert!(snapshot.value.is_none());
        assert!(snapshot.validating);
    }

    #[test]
    fn test_error_keeps_previous_value() {
        let cache: SwrCache<u32> = SwrCache::new();
        let seq = cache.begin("k");
        cache.resolve("k", seq, Ok(7));

        let seq = cache.begin("k");
        cache.resolve("k", seq, Err(LinkshortError::fetch_failed("boom")));
        let snapshot = cache.snapshot("k");
        assert_eq!(snapshot.value.as_deref(), Some(&7));
        assert!(snapshot.error.is_some());

        // 下一次成功清除错误
        let seq = cache.begin("k");
        cache.resolve("k", seq, Ok(8));
        let snapshot = cache.snapshot("k");
        assert_eq!(snapshot.value.as_deref(), Some(&8));
        assert!(snapshot.error.is_none());
    }

    #[test]
    fn test_subscribers_are_notified() {
        let cache: SwrCache<u32> = SwrCache::new();
        let mut rx = cache.subscribe("k");
        assert!(!rx.has_changed().unwrap());

        let seq = cache.begin("k");
        assert!(rx.has_changed().unwrap());
        rx.borrow_and_update();

        cache.resolve("k", seq, Ok(1));
        assert!(rx.has_changed().unwrap());
    }
}
