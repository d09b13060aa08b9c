//! Fallible boolean tests with short-circuiting composition.
//!
//! Evaluation of `and`/`or` is strictly left to right. The right operand is
//! consulted only when the left one evaluated without error and did not
//! already decide the result; an error from the left operand is returned
//! as is.
//!
//! | left            | `and`          | `or`           |
//! |-----------------|----------------|----------------|
//! | `Err(e)`        | `Err(e)`       | `Err(e)`       |
//! | `Ok(false)`     | `Ok(false)`    | right operand  |
//! | `Ok(true)`      | right operand  | `Ok(true)`     |

use std::sync::Arc;

use super::error::{AlreadyInvoked, EmptyCallable, FunctionError};
use super::macros::impl_callable_wrapper;
use super::once_guard::OnceGuard;

type PredicateFn<T, E> = dyn Fn(&T) -> Result<bool, E> + Send + Sync;

/// A fallible test on a borrowed value.
///
/// # Examples
///
/// ```rust
/// use busters::function::Predicate;
///
/// let non_empty: Predicate<String> = Predicate::new(|text: &String| Ok(!text.is_empty()));
/// let short: Predicate<String> = Predicate::new(|text: &String| Ok(text.len() < 8));
///
/// let valid_name = non_empty.and(short);
/// assert_eq!(valid_name.test(&"alice".to_string()), Ok(true));
/// assert_eq!(valid_name.test(&String::new()), Ok(false));
/// ```
pub struct Predicate<T, E = FunctionError> {
    function: Option<Arc<PredicateFn<T, E>>>,
}

impl_callable_wrapper!(Predicate<T, E>);

impl<T, E> Predicate<T, E> {
    /// Wraps `function` as a predicate.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&T) -> Result<bool, E> + Send + Sync + 'static,
    {
        Self {
            function: Some(Arc::new(function)),
        }
    }
}

impl<T, E: From<EmptyCallable>> Predicate<T, E> {
    /// Evaluates the test against `value`.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyCallable`] for an empty predicate, otherwise whatever
    /// error the wrapped behavior produces.
    #[inline]
    pub fn test(&self, value: &T) -> Result<bool, E> {
        match &self.function {
            Some(function) => function(value),
            None => Err(EmptyCallable.into()),
        }
    }
}

impl<T: 'static, E: From<EmptyCallable> + 'static> Predicate<T, E> {
    /// Short-circuiting conjunction.
    ///
    /// `next` is evaluated only when `self` evaluated to `Ok(true)`.
    #[must_use]
    pub fn and(&self, next: Self) -> Self {
        let first = self.clone();
        Self::new(move |value| {
            if first.test(value)? {
                next.test(value)
            } else {
                Ok(false)
            }
        })
    }

    /// Short-circuiting disjunction.
    ///
    /// `next` is evaluated only when `self` evaluated to `Ok(false)`.
    #[must_use]
    pub fn or(&self, next: Self) -> Self {
        let first = self.clone();
        Self::new(move |value| {
            if first.test(value)? {
                Ok(true)
            } else {
                next.test(value)
            }
        })
    }
}

impl<T, E> Predicate<T, E>
where
    T: 'static,
    E: Clone + Send + From<EmptyCallable> + From<AlreadyInvoked> + 'static,
{
    /// Returns a predicate that evaluates `self` at most once.
    ///
    /// The verdict for the first value tested is replayed for every later
    /// value.
    #[must_use]
    pub fn once(&self) -> Self {
        let inner = self.clone();
        let guard = OnceGuard::new();
        Self::new(move |value| {
            guard
                .call(|| inner.test(value))
                .unwrap_or_else(|| Err(AlreadyInvoked.into()))
        })
    }
}
