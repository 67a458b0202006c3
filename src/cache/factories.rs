//! Cached factories for parameterized predicates.

use std::any::{Any, TypeId};
use std::sync::Arc;

use super::{address, CacheKey, PredicateCache};
use crate::error::RequirementError;
use crate::predicate::{self, AllInstanceOf, And, ContainsPattern, InstanceOf, Not, Or, Xor};

impl PredicateCache {
    /// Shared [`ContainsPattern`] predicate for `pattern`.
    ///
    /// # Errors
    ///
    /// An invalid-argument error when `pattern` does not compile. Nothing is
    /// cached in that case.
    pub fn contains_pattern(
        &self,
        pattern: &str,
    ) -> Result<Arc<ContainsPattern>, RequirementError> {
        self.get_or_try_insert_with(pattern.to_owned(), || predicate::contains_pattern(pattern))
    }

    /// Shared [`InstanceOf`] predicate for `C`.
    pub fn instance_of<C: Any>(&self) -> Arc<InstanceOf<C>> {
        self.get_or_insert_with(TypeId::of::<C>(), predicate::instance_of::<C>)
    }

    /// Shared [`AllInstanceOf`] predicate for `C`.
    pub fn all_instance_of<C: Any>(&self) -> Arc<AllInstanceOf<C>> {
        self.get_or_insert_with(TypeId::of::<C>(), predicate::all_instance_of::<C>)
    }

    /// Shared AND of two shared members.
    ///
    /// The same member instances, in the same order, yield the same composite
    /// while it is alive.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use reqs::cache::PredicateCache;
    /// use reqs::predicate::*;
    ///
    /// let cache = PredicateCache::new();
    /// let digits = cache.contains_pattern("[0-9]").unwrap();
    /// let filled = Arc::new(not_blank_string());
    ///
    /// let a = cache.shared_and(&digits, &filled);
    /// let b = cache.shared_and(&digits, &filled);
    /// assert!(Arc::ptr_eq(&a, &b));
    /// assert!(a.apply("route 66").unwrap());
    /// ```
    pub fn shared_and<A, B>(&self, first: &Arc<A>, second: &Arc<B>) -> Arc<And<Arc<A>, Arc<B>>>
    where
        A: ?Sized + Send + Sync + 'static,
        B: ?Sized + Send + Sync + 'static,
    {
        let key = CacheKey::members([address(first), address(second)]);
        self.get_or_insert_with(key, || And(first.clone(), second.clone()))
    }

    /// Shared OR of two shared members.
    pub fn shared_or<A, B>(&self, first: &Arc<A>, second: &Arc<B>) -> Arc<Or<Arc<A>, Arc<B>>>
    where
        A: ?Sized + Send + Sync + 'static,
        B: ?Sized + Send + Sync + 'static,
    {
        let key = CacheKey::members([address(first), address(second)]);
        self.get_or_insert_with(key, || Or(first.clone(), second.clone()))
    }

    /// Shared XOR of two shared members.
    pub fn shared_xor<A, B>(&self, first: &Arc<A>, second: &Arc<B>) -> Arc<Xor<Arc<A>, Arc<B>>>
    where
        A: ?Sized + Send + Sync + 'static,
        B: ?Sized + Send + Sync + 'static,
    {
        let key = CacheKey::members([address(first), address(second)]);
        self.get_or_insert_with(key, || Xor(first.clone(), second.clone()))
    }

    /// Shared negation of a shared predicate.
    pub fn shared_not<A>(&self, original: &Arc<A>) -> Arc<Not<Arc<A>>>
    where
        A: ?Sized + Send + Sync + 'static,
    {
        self.get_or_insert_with(CacheKey::members([address(original)]), || {
            Not(original.clone())
        })
    }
}

#[cfg(test)]
mod tests {
    use std::any::Any;

    use super::*;
    use crate::predicate::{always_true, blank_string, zero, Predicate, SharedPredicate};

    #[test]
    fn contains_pattern_is_shared_per_pattern() {
        let cache = PredicateCache::new();
        let a = cache.contains_pattern("a+").unwrap();
        let b = cache.contains_pattern("a+").unwrap();
        let c = cache.contains_pattern("b+").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &c));
        assert!(a.apply("caaat").unwrap());
    }

    #[test]
    fn invalid_pattern_is_not_cached() {
        let cache = PredicateCache::new();
        let err = cache.contains_pattern("(").unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(cache.is_empty());
    }

    #[test]
    fn instance_checks_are_shared_per_type() {
        let cache = PredicateCache::new();
        let a = cache.instance_of::<String>();
        let b = cache.instance_of::<String>();
        assert!(Arc::ptr_eq(&a, &b));

        let all_a = cache.all_instance_of::<String>();
        let all_b = cache.all_instance_of::<String>();
        assert!(Arc::ptr_eq(&all_a, &all_b));
        assert_eq!(cache.len(), 2);

        let value: Box<dyn Any> = Box::new(String::new());
        assert!(a.apply(&*value).unwrap());
    }

    #[test]
    fn composite_identity_follows_members() {
        let cache = PredicateCache::new();
        let first: SharedPredicate<i32> = Arc::new(zero());
        let second: SharedPredicate<i32> = Arc::new(always_true());

        let a = cache.shared_or(&first, &second);
        let b = cache.shared_or(&first, &second);
        assert!(Arc::ptr_eq(&a, &b));

        // reversed members are a different key
        let reversed = cache.shared_or(&second, &first);
        assert!(!Arc::ptr_eq(&a, &reversed));

        // a fresh member yields a fresh composite
        let other: SharedPredicate<i32> = Arc::new(zero());
        let c = cache.shared_or(&other, &second);
        assert!(!Arc::ptr_eq(&a, &c));
    }

    #[test]
    fn dropped_composite_is_rebuilt() {
        let cache = PredicateCache::new();
        let member = Arc::new(blank_string());

        let first = cache.shared_not(&member);
        let weak = Arc::downgrade(&first);
        drop(first);
        assert!(weak.upgrade().is_none());

        let second = cache.shared_not(&member);
        assert_eq!(cache.live_len(), 1);
        assert!(second.apply("text").unwrap());
    }

    #[test]
    fn xor_and_combinators_evaluate() {
        let cache = PredicateCache::new();
        let positive: SharedPredicate<i32> = Arc::new(|x: &i32| *x > 0);
        let even: SharedPredicate<i32> = Arc::new(|x: &i32| x % 2 == 0);

        let both = cache.shared_and(&positive, &even);
        let one = cache.shared_xor(&positive, &even);
        assert!(both.apply(&2).unwrap());
        assert!(!one.apply(&2).unwrap());
        assert!(one.apply(&3).unwrap());
    }
}
