//! Error types for callable wrappers.
//!
//! Two sentinel errors are part of the public contract:
//!
//! - [`EmptyCallable`]: a value-producing wrapper was invoked in its empty state
//! - [`AlreadyInvoked`]: a once-guarded wrapper can no longer produce its
//!   captured outcome because the single invocation panicked
//!
//! Wrappers are generic over their error type and only require that these
//! sentinels convert into it. [`FunctionError`] is the default error type and
//! also carries arbitrary failures of the wrapped behavior.

use std::error::Error;
use std::sync::Arc;

/// Returned when a value-producing wrapper holds no behavior.
///
/// # Examples
///
/// ```rust
/// use busters::function::{EmptyCallable, FunctionError, Supplier};
///
/// let supplier: Supplier<i32> = Supplier::empty();
/// assert_eq!(supplier.supply(), Err(FunctionError::from(EmptyCallable)));
/// assert_eq!(EmptyCallable.to_string(), "empty function");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, thiserror::Error)]
#[error("empty function")]
pub struct EmptyCallable;

/// Returned by a once-guarded value wrapper whose single invocation panicked.
///
/// A guard that fired normally never returns this error: every caller
/// receives the captured outcome instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, thiserror::Error)]
#[error("already invoked")]
pub struct AlreadyInvoked;

/// The default error type of every callable wrapper.
///
/// # Examples
///
/// ```rust
/// use busters::function::{Callable, FunctionError};
///
/// let failing: Callable<i32> = Callable::new(|| Err(FunctionError::message("disk full")));
/// let error = failing.call().unwrap_err();
/// assert_eq!(error.to_string(), "disk full");
/// assert!(!error.is_empty_callable());
/// ```
#[derive(Debug, Clone, thiserror::Error)]
pub enum FunctionError {
    /// The invoked wrapper was empty.
    #[error("empty function")]
    EmptyCallable,
    /// The once guard was poisoned before an outcome was captured.
    #[error("already invoked")]
    AlreadyInvoked,
    /// The wrapped behavior failed.
    #[error(transparent)]
    Failed(Arc<dyn Error + Send + Sync + 'static>),
}

impl FunctionError {
    /// Wraps an arbitrary error produced by the wrapped behavior.
    pub fn failed<Err>(error: Err) -> Self
    where
        Err: Error + Send + Sync + 'static,
    {
        Self::Failed(Arc::new(error))
    }

    /// Creates a failure carrying only a message.
    pub fn message(message: impl Into<String>) -> Self {
        let message: String = message.into();
        let boxed: Box<dyn Error + Send + Sync> = message.into();
        Self::Failed(Arc::from(boxed))
    }

    /// Returns `true` for the [`EmptyCallable`] sentinel.
    pub const fn is_empty_callable(&self) -> bool {
        matches!(self, Self::EmptyCallable)
    }

    /// Returns `true` for the [`AlreadyInvoked`] sentinel.
    pub const fn is_already_invoked(&self) -> bool {
        matches!(self, Self::AlreadyInvoked)
    }
}

// Failures compare by identity: a replayed outcome shares the original Arc.
impl PartialEq for FunctionError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::EmptyCallable, Self::EmptyCallable)
            | (Self::AlreadyInvoked, Self::AlreadyInvoked) => true,
            (Self::Failed(left), Self::Failed(right)) => Arc::ptr_eq(left, right),
            _ => false,
        }
    }
}

impl From<EmptyCallable> for FunctionError {
    fn from(_: EmptyCallable) -> Self {
        Self::EmptyCallable
    }
}

impl From<AlreadyInvoked> for FunctionError {
    fn from(_: AlreadyInvoked) -> Self {
        Self::AlreadyInvoked
    }
}
