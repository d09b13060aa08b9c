//! One- and two-argument value transformers.
//!
//! `and_then` on transformers is pipeline composition: the output of the
//! first step is the input of the next, and the first error stops the chain.
//!
//! # Examples
//!
//! ```rust
//! use busters::function::Function;
//!
//! let increment: Function<i32, i32> = Function::new(|value| Ok(value + 1));
//! let double: Function<i32, i32> = Function::new(|value| Ok(value * 2));
//!
//! let increment_then_double = increment.and_then(double);
//! assert_eq!(increment_then_double.apply(5), Ok(12));
//! ```

use std::sync::Arc;

use super::error::{AlreadyInvoked, EmptyCallable, FunctionError};
use super::macros::impl_callable_wrapper;
use super::once_guard::OnceGuard;

type FunctionFn<T, R, E> = dyn Fn(T) -> Result<R, E> + Send + Sync;
type BiFunctionFn<T, U, R, E> = dyn Fn(T, U) -> Result<R, E> + Send + Sync;

// =============================================================================
// Function
// =============================================================================

/// A fallible transformation of one argument.
pub struct Function<T, R, E = FunctionError> {
    function: Option<Arc<FunctionFn<T, R, E>>>,
}

impl_callable_wrapper!(Function<T, R, E>);

impl<T, R, E> Function<T, R, E> {
    /// Wraps `function` as a transformer.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(T) -> Result<R, E> + Send + Sync + 'static,
    {
        Self {
            function: Some(Arc::new(function)),
        }
    }
}

impl<T, R, E: From<EmptyCallable>> Function<T, R, E> {
    /// Transforms `value`.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyCallable`] for an empty transformer, otherwise whatever
    /// error the wrapped behavior produces.
    #[inline]
    pub fn apply(&self, value: T) -> Result<R, E> {
        match &self.function {
            Some(function) => function(value),
            None => Err(EmptyCallable.into()),
        }
    }
}

impl<T, R, E> Function<T, R, E>
where
    T: 'static,
    R: 'static,
    E: From<EmptyCallable> + 'static,
{
    /// Returns a transformer that feeds the output of `self` into `next`.
    ///
    /// `next` is not invoked when `self` fails.
    #[must_use]
    pub fn and_then<V: 'static>(&self, next: Function<R, V, E>) -> Function<T, V, E> {
        let first = self.clone();
        Function::new(move |value: T| next.apply(first.apply(value)?))
    }
}

impl<T, R, E> Function<T, R, E>
where
    T: 'static,
    R: Clone + Send + 'static,
    E: Clone + Send + From<EmptyCallable> + From<AlreadyInvoked> + 'static,
{
    /// Returns a transformer that invokes `self` at most once.
    ///
    /// The outcome for the first input is replayed to every later call,
    /// whatever its input.
    #[must_use]
    pub fn once(&self) -> Self {
        let inner = self.clone();
        let guard = OnceGuard::new();
        Self::new(move |value| {
            guard
                .call(|| inner.apply(value))
                .unwrap_or_else(|| Err(AlreadyInvoked.into()))
        })
    }
}

// =============================================================================
// BiFunction
// =============================================================================

/// A fallible transformation of two arguments.
///
/// # Examples
///
/// ```rust
/// use busters::function::{BiFunction, FunctionError};
///
/// let divide: BiFunction<i32, i32, i32> = BiFunction::new(|numerator, denominator| {
///     if denominator == 0 {
///         Err(FunctionError::message("division by zero"))
///     } else {
///         Ok(numerator / denominator)
///     }
/// });
///
/// assert_eq!(divide.apply(10, 2), Ok(5));
/// assert!(divide.apply(1, 0).is_err());
/// ```
pub struct BiFunction<T, U, R, E = FunctionError> {
    function: Option<Arc<BiFunctionFn<T, U, R, E>>>,
}

impl_callable_wrapper!(BiFunction<T, U, R, E>);

impl<T, U, R, E> BiFunction<T, U, R, E> {
    /// Wraps `function` as a two-argument transformer.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(T, U) -> Result<R, E> + Send + Sync + 'static,
    {
        Self {
            function: Some(Arc::new(function)),
        }
    }
}

impl<T, U, R, E: From<EmptyCallable>> BiFunction<T, U, R, E> {
    /// Transforms `first` and `second`.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyCallable`] for an empty transformer, otherwise whatever
    /// error the wrapped behavior produces.
    #[inline]
    pub fn apply(&self, first: T, second: U) -> Result<R, E> {
        match &self.function {
            Some(function) => function(first, second),
            None => Err(EmptyCallable.into()),
        }
    }
}

impl<T, U, R, E> BiFunction<T, U, R, E>
where
    T: 'static,
    U: 'static,
    R: 'static,
    E: From<EmptyCallable> + 'static,
{
    /// Returns a transformer that feeds the output of `self` into `next`.
    ///
    /// `next` is not invoked when `self` fails.
    #[must_use]
    pub fn and_then<V: 'static>(&self, next: Function<R, V, E>) -> BiFunction<T, U, V, E> {
        let head = self.clone();
        BiFunction::new(move |first: T, second: U| next.apply(head.apply(first, second)?))
    }
}

impl<T, U, R, E> BiFunction<T, U, R, E>
where
    T: 'static,
    U: 'static,
    R: Clone + Send + 'static,
    E: Clone + Send + From<EmptyCallable> + From<AlreadyInvoked> + 'static,
{
    /// Returns a transformer that invokes `self` at most once.
    ///
    /// The outcome for the first inputs is replayed to every later call.
    #[must_use]
    pub fn once(&self) -> Self {
        let inner = self.clone();
        let guard = OnceGuard::new();
        Self::new(move |first, second| {
            guard
                .call(|| inner.apply(first, second))
                .unwrap_or_else(|| Err(AlreadyInvoked.into()))
        })
    }
}
