//! Side-effecting actions of one, two and three arguments.
//!
//! Actions never fail: invoking an empty action is a no-op rather than an
//! error, and `and_then` always runs both steps in order.
//!
//! # Examples
//!
//! ```rust
//! use busters::function::Consumer;
//! use std::sync::{Arc, Mutex};
//!
//! let log = Arc::new(Mutex::new(Vec::new()));
//! let first_log = Arc::clone(&log);
//! let second_log = Arc::clone(&log);
//!
//! let record = Consumer::new(move |value: i32| first_log.lock().unwrap().push(value))
//!     .and_then(Consumer::new(move |value: i32| second_log.lock().unwrap().push(value * 10)));
//!
//! record.apply(4);
//! assert_eq!(*log.lock().unwrap(), vec![4, 40]);
//! ```

use std::sync::Arc;

use super::macros::impl_callable_wrapper;
use super::once_guard::OnceGuard;

type ConsumerFn<T> = dyn Fn(T) + Send + Sync;
type BiConsumerFn<T, U> = dyn Fn(T, U) + Send + Sync;
type TriConsumerFn<T, U, V> = dyn Fn(T, U, V) + Send + Sync;

// =============================================================================
// Consumer
// =============================================================================

/// An action that accepts one argument and returns nothing.
pub struct Consumer<T> {
    function: Option<Arc<ConsumerFn<T>>>,
}

impl_callable_wrapper!(Consumer<T>);

/// A callback that receives the outcome of a fallible operation.
pub type OnResult<T, E = super::FunctionError> = Consumer<Result<T, E>>;

impl<T> Consumer<T> {
    /// Wraps `function` as a consumer.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            function: Some(Arc::new(function)),
        }
    }

    /// Runs the action. Does nothing when the consumer is empty.
    #[inline]
    pub fn apply(&self, value: T) {
        if let Some(function) = &self.function {
            function(value);
        }
    }
}

impl<T: 'static> Consumer<T> {
    /// Returns a consumer whose action runs at most once.
    ///
    /// Later calls, including concurrent ones, are no-ops once the first
    /// call has claimed the guard.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use busters::function::Consumer;
    /// use std::sync::Arc;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    ///
    /// let calls = Arc::new(AtomicUsize::new(0));
    /// let counted = Arc::clone(&calls);
    /// let init = Consumer::new(move |_: &str| {
    ///     counted.fetch_add(1, Ordering::SeqCst);
    /// })
    /// .once();
    ///
    /// init.apply("a");
    /// init.apply("b");
    /// assert_eq!(calls.load(Ordering::SeqCst), 1);
    /// ```
    #[must_use]
    pub fn once(&self) -> Self {
        let inner = self.clone();
        let guard = OnceGuard::new();
        Self::new(move |value| {
            guard.call(|| inner.apply(value));
        })
    }
}

impl<T: Clone + 'static> Consumer<T> {
    /// Returns a consumer that runs `self`, then `next`, with the same input.
    #[must_use]
    pub fn and_then(&self, next: Self) -> Self {
        let first = self.clone();
        Self::new(move |value: T| {
            first.apply(value.clone());
            next.apply(value);
        })
    }
}

// =============================================================================
// BiConsumer
// =============================================================================

/// An action that accepts two arguments and returns nothing.
pub struct BiConsumer<T, U> {
    function: Option<Arc<BiConsumerFn<T, U>>>,
}

impl_callable_wrapper!(BiConsumer<T, U>);

impl<T, U> BiConsumer<T, U> {
    /// Wraps `function` as a two-argument consumer.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(T, U) + Send + Sync + 'static,
    {
        Self {
            function: Some(Arc::new(function)),
        }
    }

    /// Runs the action. Does nothing when the consumer is empty.
    #[inline]
    pub fn apply(&self, first: T, second: U) {
        if let Some(function) = &self.function {
            function(first, second);
        }
    }
}

impl<T: 'static, U: 'static> BiConsumer<T, U> {
    /// Returns a consumer whose action runs at most once.
    #[must_use]
    pub fn once(&self) -> Self {
        let inner = self.clone();
        let guard = OnceGuard::new();
        Self::new(move |first, second| {
            guard.call(|| inner.apply(first, second));
        })
    }
}

impl<T: Clone + 'static, U: Clone + 'static> BiConsumer<T, U> {
    /// Returns a consumer that runs `self`, then `next`, with the same inputs.
    #[must_use]
    pub fn and_then(&self, next: Self) -> Self {
        let head = self.clone();
        Self::new(move |first: T, second: U| {
            head.apply(first.clone(), second.clone());
            next.apply(first, second);
        })
    }
}

// =============================================================================
// TriConsumer
// =============================================================================

/// An action that accepts three arguments and returns nothing.
pub struct TriConsumer<T, U, V> {
    function: Option<Arc<TriConsumerFn<T, U, V>>>,
}

impl_callable_wrapper!(TriConsumer<T, U, V>);

impl<T, U, V> TriConsumer<T, U, V> {
    /// Wraps `function` as a three-argument consumer.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(T, U, V) + Send + Sync + 'static,
    {
        Self {
            function: Some(Arc::new(function)),
        }
    }

    /// Runs the action. Does nothing when the consumer is empty.
    #[inline]
    pub fn apply(&self, first: T, second: U, third: V) {
        if let Some(function) = &self.function {
            function(first, second, third);
        }
    }
}

impl<T: 'static, U: 'static, V: 'static> TriConsumer<T, U, V> {
    /// Returns a consumer whose action runs at most once.
    #[must_use]
    pub fn once(&self) -> Self {
        let inner = self.clone();
        let guard = OnceGuard::new();
        Self::new(move |first, second, third| {
            guard.call(|| inner.apply(first, second, third));
        })
    }
}

impl<T, U, V> TriConsumer<T, U, V>
where
    T: Clone + 'static,
    U: Clone + 'static,
    V: Clone + 'static,
{
    /// Returns a consumer that runs `self`, then `next`, with the same inputs.
    #[must_use]
    pub fn and_then(&self, next: Self) -> Self {
        let head = self.clone();
        Self::new(move |first: T, second: U, third: V| {
            head.apply(first.clone(), second.clone(), third.clone());
            next.apply(first, second, third);
        })
    }
}
