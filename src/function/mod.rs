//! Fallible callable wrappers and their composition.
//!
//! This module provides small wrapper types around closures. Each wrapper
//! either holds a behavior or is *empty*, and the empty state is a legal,
//! checked value rather than a crash:
//!
//! - Actions ([`Consumer`], [`BiConsumer`], [`TriConsumer`]) do nothing
//!   when empty
//! - Value producers ([`Supplier`], [`BiSupplier`], [`Function`],
//!   [`BiFunction`], [`Callable`], [`Predicate`]) return [`EmptyCallable`]
//!   when empty
//!
//! # Composition
//!
//! | Wrapper                         | Operator   | Semantics |
//! |---------------------------------|------------|-----------|
//! | `Consumer` family               | `and_then` | run both, in order, unconditionally |
//! | [`Callable`]                    | `and_then` | run `next` only if `self` succeeded; keep the last value |
//! | [`Function`], [`BiFunction`]    | `and_then` | pipe the output into `next`; stop at the first error |
//! | [`Predicate`]                   | `and`/`or` | short-circuit, left to right |
//! | all                             | `once`     | run the wrapped behavior at most once |
//!
//! Composition never invokes its operands; it builds a new wrapper that
//! captures them. Wrappers are immutable and cheap to clone.
//!
//! # Once Guards
//!
//! `once()` wraps any wrapper in a [`OnceGuard`]. Exactly one caller runs the
//! wrapped behavior; concurrent callers block until it finishes, and every
//! caller of a value-producing wrapper receives the same captured `Result`.
//!
//! # Examples
//!
//! ```rust
//! use busters::function::{Callable, FunctionError, Predicate, Supplier};
//!
//! // Empty value producers report a sentinel error
//! let unset: Supplier<u32> = Supplier::empty();
//! assert_eq!(unset.supply(), Err(FunctionError::EmptyCallable));
//!
//! // Short-circuiting tests
//! let is_small = Predicate::<u32>::new(|value| Ok(*value < 10));
//! let unreachable = Predicate::<u32>::new(|_| unreachable!());
//! assert_eq!(is_small.or(unreachable).test(&3), Ok(true));
//!
//! // Replay of a single computation
//! let expensive: Callable<u64> = Callable::new(|| Ok((1..=20u64).product())).once();
//! assert_eq!(expensive.call(), Ok(2_432_902_008_176_640_000));
//! ```

mod callable;
mod consumer;
mod error;
mod macros;
mod once_guard;
mod predicate;
mod supplier;
mod transform;

pub use callable::Callable;
pub use consumer::{BiConsumer, Consumer, OnResult, TriConsumer};
pub use error::{AlreadyInvoked, EmptyCallable, FunctionError};
pub use once_guard::OnceGuard;
pub use predicate::Predicate;
pub use supplier::{BiSupplier, Supplier};
pub use transform::{BiFunction, Function};

static_assertions::assert_impl_all!(Consumer<String>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(TriConsumer<String, i32, Vec<u8>>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Supplier<Vec<u8>>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Callable<i32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(Predicate<String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(OnceGuard<Result<i32, FunctionError>>: Send, Sync);
