//! Zero-argument transformers that can be sequenced.
//!
//! [`Callable`] has the same shape as [`Supplier`] and converts to and from it
//! freely. What it adds is [`Callable::and_then`]: sequencing with
//! first-failure-wins short-circuiting.
//!
//! # Sequencing Semantics
//!
//! `first.and_then(next)` calls `first`; on failure it returns that failure
//! without touching `next`. On success the value of `first` is discarded and
//! the outcome of `next` is returned. `next` receives no input, so a chain of
//! callables behaves as an ordered list of steps where only the last value
//! is kept. For pipelines that pass values along, use
//! [`Function::and_then`](super::Function::and_then).
//!
//! # Examples
//!
//! ```rust
//! use busters::function::{Callable, FunctionError};
//!
//! let connect: Callable<&str> = Callable::new(|| Ok("connected"));
//! let handshake: Callable<&str> = Callable::new(|| Ok("ready"));
//! assert_eq!(connect.and_then(handshake).call(), Ok("ready"));
//!
//! let refused: Callable<&str> = Callable::new(|| Err(FunctionError::message("refused")));
//! let never: Callable<&str> = Callable::new(|| unreachable!());
//! assert!(refused.and_then(never).call().is_err());
//! ```

use std::sync::Arc;

use super::error::{AlreadyInvoked, EmptyCallable, FunctionError};
use super::macros::impl_callable_wrapper;
use super::once_guard::OnceGuard;
use super::supplier::{Supplier, SupplierFn};

/// A zero-argument fallible computation.
pub struct Callable<T, E = FunctionError> {
    function: Option<Arc<SupplierFn<T, E>>>,
}

impl_callable_wrapper!(Callable<T, E>);

impl<T, E> Callable<T, E> {
    /// Wraps `function` as a callable.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn() -> Result<T, E> + Send + Sync + 'static,
    {
        Self {
            function: Some(Arc::new(function)),
        }
    }
}

impl<T, E: From<EmptyCallable>> Callable<T, E> {
    /// Runs the computation.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyCallable`] for an empty callable, otherwise whatever
    /// error the wrapped behavior produces.
    #[inline]
    pub fn call(&self) -> Result<T, E> {
        match &self.function {
            Some(function) => function(),
            None => Err(EmptyCallable.into()),
        }
    }
}

impl<T: 'static, E: From<EmptyCallable> + 'static> Callable<T, E> {
    /// Returns a callable that runs `self`, then `next` if `self` succeeded.
    ///
    /// The value produced by `self` is discarded.
    #[must_use]
    pub fn and_then(&self, next: Self) -> Self {
        let first = self.clone();
        Self::new(move || {
            first.call()?;
            next.call()
        })
    }
}

impl<T, E> Callable<T, E>
where
    T: Clone + Send + 'static,
    E: Clone + Send + From<EmptyCallable> + From<AlreadyInvoked> + 'static,
{
    /// Returns a callable that runs `self` at most once and replays the
    /// captured outcome, success or failure, to every caller.
    ///
    /// Concurrent callers block until the single run completes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use busters::function::Callable;
    /// use std::sync::Arc;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    ///
    /// let runs = Arc::new(AtomicUsize::new(0));
    /// let counted = Arc::clone(&runs);
    /// let load_config: Callable<String> = Callable::new(move || {
    ///     counted.fetch_add(1, Ordering::SeqCst);
    ///     Ok("debug = true".to_string())
    /// })
    /// .once();
    ///
    /// assert_eq!(load_config.call().as_deref(), Ok("debug = true"));
    /// assert_eq!(load_config.call().as_deref(), Ok("debug = true"));
    /// assert_eq!(runs.load(Ordering::SeqCst), 1);
    /// ```
    #[must_use]
    pub fn once(&self) -> Self {
        let inner = self.clone();
        let guard = OnceGuard::new();
        Self::new(move || {
            guard
                .call(|| inner.call())
                .unwrap_or_else(|| Err(AlreadyInvoked.into()))
        })
    }
}

impl<T, E> From<Supplier<T, E>> for Callable<T, E> {
    fn from(supplier: Supplier<T, E>) -> Self {
        Self {
            function: supplier.function,
        }
    }
}

impl<T, E> From<Callable<T, E>> for Supplier<T, E> {
    fn from(callable: Callable<T, E>) -> Self {
        Self {
            function: callable.function,
        }
    }
}
