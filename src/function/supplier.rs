//! Zero-argument value producers.
//!
//! A supplier produces one value (or two, for [`BiSupplier`]) or explains why
//! it could not. An empty supplier reports [`EmptyCallable`].

use std::sync::Arc;

use super::error::{AlreadyInvoked, EmptyCallable, FunctionError};
use super::macros::impl_callable_wrapper;
use super::once_guard::OnceGuard;

pub(crate) type SupplierFn<T, E> = dyn Fn() -> Result<T, E> + Send + Sync;
type BiSupplierFn<T, U, E> = dyn Fn() -> Result<(T, U), E> + Send + Sync;

// =============================================================================
// Supplier
// =============================================================================

/// A producer of a single value.
///
/// # Examples
///
/// ```rust
/// use busters::function::{FunctionError, Supplier};
///
/// let answer: Supplier<i32> = Supplier::new(|| Ok(42));
/// assert_eq!(answer.supply(), Ok(42));
///
/// let missing: Supplier<i32> = Supplier::empty();
/// assert_eq!(missing.supply(), Err(FunctionError::EmptyCallable));
/// ```
pub struct Supplier<T, E = FunctionError> {
    pub(crate) function: Option<Arc<SupplierFn<T, E>>>,
}

impl_callable_wrapper!(Supplier<T, E>);

impl<T, E> Supplier<T, E> {
    /// Wraps `function` as a supplier.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn() -> Result<T, E> + Send + Sync + 'static,
    {
        Self {
            function: Some(Arc::new(function)),
        }
    }
}

impl<T, E: From<EmptyCallable>> Supplier<T, E> {
    /// Produces the value.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyCallable`] for an empty supplier, otherwise whatever
    /// error the wrapped behavior produces.
    #[inline]
    pub fn supply(&self) -> Result<T, E> {
        self.function
            .as_ref()
            .map_or_else(|| Err(EmptyCallable.into()), |function| function())
    }
}

impl<T, E> Supplier<T, E>
where
    T: Clone + Send + 'static,
    E: Clone + Send + From<EmptyCallable> + From<AlreadyInvoked> + 'static,
{
    /// Returns a supplier that invokes `self` at most once and replays the
    /// captured outcome to every caller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use busters::function::Supplier;
    /// use std::sync::Arc;
    /// use std::sync::atomic::{AtomicI32, Ordering};
    ///
    /// let counter = Arc::new(AtomicI32::new(0));
    /// let source = Arc::clone(&counter);
    /// let next_id: Supplier<i32> =
    ///     Supplier::new(move || Ok(source.fetch_add(1, Ordering::SeqCst) + 1)).once();
    ///
    /// assert_eq!(next_id.supply(), Ok(1));
    /// assert_eq!(next_id.supply(), Ok(1));
    /// assert_eq!(counter.load(Ordering::SeqCst), 1);
    /// ```
    #[must_use]
    pub fn once(&self) -> Self {
        let inner = self.clone();
        let guard = OnceGuard::new();
        Self::new(move || {
            guard
                .call(|| inner.supply())
                .unwrap_or_else(|| Err(AlreadyInvoked.into()))
        })
    }
}

// =============================================================================
// BiSupplier
// =============================================================================

/// A producer of a pair of values.
pub struct BiSupplier<T, U, E = FunctionError> {
    function: Option<Arc<BiSupplierFn<T, U, E>>>,
}

impl_callable_wrapper!(BiSupplier<T, U, E>);

impl<T, U, E> BiSupplier<T, U, E> {
    /// Wraps `function` as a pair supplier.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn() -> Result<(T, U), E> + Send + Sync + 'static,
    {
        Self {
            function: Some(Arc::new(function)),
        }
    }
}

impl<T, U, E: From<EmptyCallable>> BiSupplier<T, U, E> {
    /// Produces both values.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyCallable`] for an empty supplier, otherwise whatever
    /// error the wrapped behavior produces.
    #[inline]
    pub fn supply(&self) -> Result<(T, U), E> {
        self.function
            .as_ref()
            .map_or_else(|| Err(EmptyCallable.into()), |function| function())
    }
}

impl<T, U, E> BiSupplier<T, U, E>
where
    T: Clone + Send + 'static,
    U: Clone + Send + 'static,
    E: Clone + Send + From<EmptyCallable> + From<AlreadyInvoked> + 'static,
{
    /// Returns a pair supplier that invokes `self` at most once.
    #[must_use]
    pub fn once(&self) -> Self {
        let inner = self.clone();
        let guard = OnceGuard::new();
        Self::new(move || {
            guard
                .call(|| inner.supply())
                .unwrap_or_else(|| Err(AlreadyInvoked.into()))
        })
    }
}
