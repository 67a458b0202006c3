//! Weak-reference cache of predicate instances.
//!
//! A [`PredicateCache`] lets equal factory requests share one predicate
//! instance while somebody still holds it. Entries are weak: once every
//! strong [`Arc`] to a cached predicate is dropped the entry is dead, and the
//! next request builds a fresh instance.
//!
//! Entries are indexed by the concrete predicate type and a [`CacheKey`].
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use reqs::cache::PredicateCache;
//!
//! let cache = PredicateCache::new();
//! let first = cache.contains_pattern("^[0-9]+$").unwrap();
//! let second = cache.contains_pattern("^[0-9]+$").unwrap();
//! assert!(Arc::ptr_eq(&first, &second));
//!
//! drop((first, second));
//! assert_eq!(cache.live_len(), 0);
//! ```
//!
//! # Concurrency
//!
//! The map sits behind a [`RwLock`]. Get-or-insert is a lookup followed by a
//! registration, not one atomic step: two threads missing at the same time may
//! both construct an instance, and the later registration wins. Callers only
//! ever observe a fully built predicate either way.

mod factories;

use std::any::{Any, TypeId};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak};

/// Identity of a cached instance within its predicate type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// The single instance of a type needing no parameters.
    Unit,
    /// A textual parameter, such as a regex pattern.
    Text(Cow<'static, str>),
    /// A type parameter, such as the target of an instance check.
    Type(TypeId),
    /// The addresses of a composite's member instances, in order.
    Members(Vec<usize>),
}

impl CacheKey {
    /// Key a composite by the identity of its members.
    ///
    /// Order matters: `members([a, b])` and `members([b, a])` are different
    /// keys even for commutative combinators.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use reqs::cache::{address, CacheKey};
    ///
    /// let a = Arc::new(1);
    /// let b = Arc::new(2);
    /// assert_ne!(
    ///     CacheKey::members([address(&a), address(&b)]),
    ///     CacheKey::members([address(&b), address(&a)]),
    /// );
    /// ```
    pub fn members(addresses: impl IntoIterator<Item = usize>) -> Self {
        CacheKey::Members(addresses.into_iter().collect())
    }
}

impl From<&'static str> for CacheKey {
    fn from(text: &'static str) -> Self {
        CacheKey::Text(Cow::Borrowed(text))
    }
}

impl From<String> for CacheKey {
    fn from(text: String) -> Self {
        CacheKey::Text(Cow::Owned(text))
    }
}

impl From<TypeId> for CacheKey {
    fn from(id: TypeId) -> Self {
        CacheKey::Type(id)
    }
}

/// Address of the value behind an `Arc`, for use in [`CacheKey::members`].
pub fn address<P: ?Sized>(member: &Arc<P>) -> usize {
    Arc::as_ptr(member) as *const () as usize
}

type Entry = Weak<dyn Any + Send + Sync>;
type Entries = HashMap<TypeId, HashMap<CacheKey, Entry>>;

/// Thread-safe weak-reference cache of shared predicate instances.
#[derive(Default)]
pub struct PredicateCache {
    entries: RwLock<Entries>,
}

impl PredicateCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cache with room for `capacity` predicate types.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::with_capacity(capacity)),
        }
    }

    // Poisoning is ignored: entries are advisory.
    fn read(&self) -> RwLockReadGuard<'_, Entries> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Entries> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record `instance` under `key` for its concrete type.
    ///
    /// Replaces any earlier entry for the same type and key. Dead entries of
    /// the same type are dropped along the way.
    pub fn register<P>(&self, key: impl Into<CacheKey>, instance: &Arc<P>)
    where
        P: Any + Send + Sync,
    {
        let key = key.into();
        let erased: Arc<dyn Any + Send + Sync> = instance.clone();
        let weak = Arc::downgrade(&erased);

        let mut entries = self.write();
        let by_key = entries.entry(TypeId::of::<P>()).or_default();
        by_key.retain(|_, entry| entry.strong_count() > 0);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            predicate = std::any::type_name::<P>(),
            key = ?key,
            live = by_key.len(),
            "registering cached predicate"
        );

        by_key.insert(key, weak);
    }

    /// Fetch the live instance of type `P` registered under `key`.
    pub fn lookup<P>(&self, key: &CacheKey) -> Option<Arc<P>>
    where
        P: Any + Send + Sync,
    {
        let found = {
            let entries = self.read();
            entries
                .get(&TypeId::of::<P>())
                .and_then(|by_key| by_key.get(key))
                .and_then(Weak::upgrade)
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(
            predicate = std::any::type_name::<P>(),
            key = ?key,
            hit = found.is_some(),
            "cached predicate lookup"
        );

        found.and_then(|instance| instance.downcast::<P>().ok())
    }

    /// Return the live instance under `key`, or build and register one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use reqs::cache::PredicateCache;
    /// use reqs::predicate::{not_blank_string, Not, BlankString};
    ///
    /// let cache = PredicateCache::new();
    /// let a: Arc<Not<BlankString>> = cache.get_or_insert_with("not-blank", not_blank_string);
    /// let b: Arc<Not<BlankString>> = cache.get_or_insert_with("not-blank", not_blank_string);
    /// assert!(Arc::ptr_eq(&a, &b));
    /// ```
    pub fn get_or_insert_with<P, F>(&self, key: impl Into<CacheKey>, make: F) -> Arc<P>
    where
        P: Any + Send + Sync,
        F: FnOnce() -> P,
    {
        let key = key.into();
        if let Some(instance) = self.lookup::<P>(&key) {
            return instance;
        }
        let instance = Arc::new(make());
        self.register(key, &instance);
        instance
    }

    /// Like [`get_or_insert_with`](Self::get_or_insert_with) for a fallible constructor.
    ///
    /// # Errors
    ///
    /// Whatever `make` returns; nothing is registered in that case.
    pub fn get_or_try_insert_with<P, E, F>(
        &self,
        key: impl Into<CacheKey>,
        make: F,
    ) -> Result<Arc<P>, E>
    where
        P: Any + Send + Sync,
        F: FnOnce() -> Result<P, E>,
    {
        let key = key.into();
        if let Some(instance) = self.lookup::<P>(&key) {
            return Ok(instance);
        }
        let instance = Arc::new(make()?);
        self.register(key, &instance);
        Ok(instance)
    }

    /// Drop every dead entry, returning how many were removed.
    pub fn purge(&self) -> usize {
        let mut entries = self.write();
        let mut removed = 0;
        for by_key in entries.values_mut() {
            let before = by_key.len();
            by_key.retain(|_, entry| entry.strong_count() > 0);
            removed += before - by_key.len();
        }
        entries.retain(|_, by_key| !by_key.is_empty());

        #[cfg(feature = "tracing")]
        tracing::trace!(removed, "purged dead cached predicates");

        removed
    }

    /// Number of entries, dead ones included.
    pub fn len(&self) -> usize {
        self.read().values().map(HashMap::len).sum()
    }

    /// Number of entries whose instance is still alive.
    pub fn live_len(&self) -> usize {
        self.read()
            .values()
            .flat_map(HashMap::values)
            .filter(|entry| entry.strong_count() > 0)
            .count()
    }

    /// Whether the cache holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget every entry. Instances already handed out are unaffected.
    pub fn clear(&self) {
        self.write().clear();
    }
}

impl fmt::Debug for PredicateCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateCache")
            .field("len", &self.len())
            .field("live_len", &self.live_len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{always_true, AlwaysTrue, BlankString, Predicate};

    #[test]
    fn lookup_misses_on_empty_cache() {
        let cache = PredicateCache::new();
        assert!(cache.lookup::<AlwaysTrue>(&CacheKey::Unit).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn register_then_lookup_returns_same_instance() {
        let cache = PredicateCache::new();
        let instance = Arc::new(always_true());
        cache.register(CacheKey::Unit, &instance);

        let found = cache.lookup::<AlwaysTrue>(&CacheKey::Unit).unwrap();
        assert!(Arc::ptr_eq(&instance, &found));
        assert!(found.apply(&1).unwrap());
    }

    #[test]
    fn entries_are_separated_by_type() {
        let cache = PredicateCache::new();
        let instance = Arc::new(always_true());
        cache.register("shared", &instance);
        assert!(cache.lookup::<BlankString>(&"shared".into()).is_none());
        assert!(cache.lookup::<AlwaysTrue>(&"shared".into()).is_some());
    }

    #[test]
    fn entry_dies_with_last_strong_reference() {
        let cache = PredicateCache::new();
        let instance = Arc::new(BlankString);
        cache.register("blank", &instance);
        assert_eq!(cache.live_len(), 1);

        drop(instance);
        assert!(cache.lookup::<BlankString>(&"blank".into()).is_none());
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.live_len(), 0);
        assert_eq!(cache.purge(), 1);
        assert!(cache.is_empty());
    }

    #[test]
    fn register_overwrites_and_prunes() {
        let cache = PredicateCache::new();
        let dead = Arc::new(BlankString);
        cache.register("dead", &dead);
        drop(dead);

        let first = Arc::new(BlankString);
        let second = Arc::new(BlankString);
        cache.register("live", &first);
        cache.register("live", &second);

        assert_eq!(cache.len(), 1);
        let found = cache.lookup::<BlankString>(&"live".into()).unwrap();
        assert!(Arc::ptr_eq(&found, &second));
    }

    #[test]
    fn get_or_insert_builds_once_while_alive() {
        let cache = PredicateCache::new();
        let mut builds = 0;
        let a = cache.get_or_insert_with(CacheKey::Unit, || {
            builds += 1;
            BlankString
        });
        let b = cache.get_or_insert_with(CacheKey::Unit, || {
            builds += 1;
            BlankString
        });
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(builds, 1);

        drop((a, b));
        let _c = cache.get_or_insert_with(CacheKey::Unit, || {
            builds += 1;
            BlankString
        });
        assert_eq!(builds, 2);
    }

    #[test]
    fn failed_construction_registers_nothing() {
        let cache = PredicateCache::new();
        let result: Result<Arc<BlankString>, &str> =
            cache.get_or_try_insert_with("bad", || Err("cannot build"));
        assert_eq!(result.unwrap_err(), "cannot build");
        assert!(cache.is_empty());
    }

    #[test]
    fn clear_keeps_handed_out_instances() {
        let cache = PredicateCache::with_capacity(4);
        let instance = cache.get_or_insert_with("x", always_true);
        cache.clear();
        assert!(cache.is_empty());
        assert!(instance.apply("still usable").unwrap());
    }

    #[test]
    fn members_key_is_order_sensitive() {
        let a = Arc::new(1u8);
        let b = Arc::new(2u8);
        let ab = CacheKey::members([address(&a), address(&b)]);
        assert_eq!(ab, CacheKey::members([address(&a), address(&b)]));
        assert_ne!(ab, CacheKey::members([address(&b), address(&a)]));
    }

    #[test]
    fn poisoned_lock_is_recovered() {
        let cache = Arc::new(PredicateCache::new());
        let instance = cache.get_or_insert_with("kept", always_true);

        let poisoner = cache.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.entries.write().unwrap();
            panic!("poison the cache lock");
        })
        .join();

        assert!(cache.entries.is_poisoned());
        let found = cache.lookup::<AlwaysTrue>(&"kept".into()).unwrap();
        assert!(Arc::ptr_eq(&instance, &found));
    }

    #[test]
    fn debug_reports_sizes() {
        let cache = PredicateCache::new();
        let _kept = cache.get_or_insert_with("x", always_true);
        assert_eq!(format!("{:?}", cache), "PredicateCache { len: 1, live_len: 1 }");
    }

    #[cfg(feature = "tracing")]
    #[tracing_test::traced_test]
    #[test]
    fn registration_is_traced() {
        let cache = PredicateCache::new();
        let _kept = cache.get_or_insert_with("traced", always_true);
        assert!(logs_contain("registering cached predicate"));
        assert!(logs_contain("cached predicate lookup"));
    }
}
