//! # busters
//!
//! Fallible functional wrappers for Rust: small callable types with a
//! well-defined empty state, composition operators, and guards that run
//! their wrapped behavior at most once.
//!
//! ## Overview
//!
//! - **Function**: `Consumer`, `Supplier`, `Function`, `Callable`, `Predicate`
//!   and their two/three argument variants, with `and_then`, `and`, `or` and
//!   `once` composition
//! - **Options**: a flat configuration record with chained `with_*` setters
//!   and callback slots built on the function wrappers
//!
//! ## Feature Flags
//!
//! - `function`: Callable wrappers and the once guard
//! - `options`: Configuration record (implies `function`)
//! - `serde`: Serialization for the configuration record
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use busters::prelude::*;
//!
//! let is_positive = Predicate::<i32>::new(|value| Ok(*value > 0));
//! let is_even = Predicate::new(|value: &i32| Ok(value % 2 == 0));
//!
//! let positive_and_even = is_positive.and(is_even);
//! assert_eq!(positive_and_even.test(&4), Ok(true));
//! assert_eq!(positive_and_even.test(&-4), Ok(false));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use busters::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "function")]
    pub use crate::function::*;

    #[cfg(feature = "options")]
    pub use crate::options::*;
}

#[cfg(feature = "function")]
pub mod function;

#[cfg(feature = "options")]
pub mod options;
