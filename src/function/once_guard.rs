//! At-most-once execution barrier with a shared outcome slot.
//!
//! [`OnceGuard`] decides, under a mutex, which caller performs the single
//! invocation. Callers arriving while the invocation runs block on a condition
//! variable until it settles, then all observe a clone of the captured outcome.
//!
//! # State Machine
//!
//! ```text
//! Unarmed --claim--> Firing --ok--> Fired(outcome)
//!                       \
//!                        --panic--> Poisoned
//! ```
//!
//! There is no transition back to `Unarmed`.
//!
//! # Re-entry
//!
//! Calling [`OnceGuard::call`] from inside the invocation on the same thread
//! panics instead of deadlocking.
//!
//! # Examples
//!
//! ```rust
//! use busters::function::OnceGuard;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::thread;
//!
//! let counter = Arc::new(AtomicUsize::new(0));
//! let guard = Arc::new(OnceGuard::new());
//!
//! let handles: Vec<_> = (0..8)
//!     .map(|_| {
//!         let guard = Arc::clone(&guard);
//!         let counter = Arc::clone(&counter);
//!         thread::spawn(move || guard.call(|| counter.fetch_add(1, Ordering::SeqCst) + 1))
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     assert_eq!(handle.join().unwrap(), Some(1));
//! }
//! assert_eq!(counter.load(Ordering::SeqCst), 1);
//! ```

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind, resume_unwind};
use std::thread::{self, ThreadId};

use parking_lot::{Condvar, Mutex};

enum GuardState<R> {
    Unarmed,
    Firing(ThreadId),
    Fired(R),
    Poisoned,
}

/// A barrier that runs one invocation and replays its outcome.
///
/// # Type Parameters
///
/// * `R` - The captured outcome, cloned out to every caller
///
/// # Thread Safety
///
/// `OnceGuard<R>` is `Send + Sync` when `R: Send`. The invocation runs
/// outside the internal lock, so only the claim decision is serialized.
pub struct OnceGuard<R> {
    state: Mutex<GuardState<R>>,
    settled: Condvar,
}

impl<R> OnceGuard<R> {
    /// Creates an unarmed guard.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(GuardState::Unarmed),
            settled: Condvar::new(),
        }
    }

    /// Returns `true` once an outcome has been captured.
    pub fn is_fired(&self) -> bool {
        matches!(*self.state.lock(), GuardState::Fired(_))
    }

    /// Returns `true` if the single invocation panicked.
    pub fn is_poisoned(&self) -> bool {
        matches!(*self.state.lock(), GuardState::Poisoned)
    }

    fn settle(&self, next: GuardState<R>) {
        *self.state.lock() = next;
        self.settled.notify_all();
    }
}

impl<R: Clone> OnceGuard<R> {
    /// Runs `invocation` if no caller has claimed the guard yet.
    ///
    /// Returns the captured outcome for every caller, including the one that
    /// ran the invocation. Blocks while another thread is running it. Returns
    /// `None` if the invocation panicked, in which case it is never retried.
    ///
    /// # Panics
    ///
    /// - Re-raises the panic of `invocation` in the caller that ran it
    /// - Panics when called re-entrantly from `invocation` on the same thread
    ///
    /// # Examples
    ///
    /// ```rust
    /// use busters::function::OnceGuard;
    ///
    /// let guard = OnceGuard::new();
    /// assert_eq!(guard.call(|| "first"), Some("first"));
    /// assert_eq!(guard.call(|| "second"), Some("first"));
    /// ```
    pub fn call<F>(&self, invocation: F) -> Option<R>
    where
        F: FnOnce() -> R,
    {
        let mut state = self.state.lock();
        loop {
            match &*state {
                GuardState::Fired(outcome) => return Some(outcome.clone()),
                GuardState::Poisoned => return None,
                GuardState::Unarmed => break,
                GuardState::Firing(owner) => {
                    assert!(
                        *owner != thread::current().id(),
                        "OnceGuard::call re-entered from its own invocation"
                    );
                }
            }
            self.settled.wait(&mut state);
        }
        *state = GuardState::Firing(thread::current().id());
        drop(state);

        match catch_unwind(AssertUnwindSafe(invocation)) {
            Ok(outcome) => {
                self.settle(GuardState::Fired(outcome.clone()));
                tracing::trace!("once guard fired");
                Some(outcome)
            }
            Err(payload) => {
                self.settle(GuardState::Poisoned);
                tracing::warn!("once guard poisoned: wrapped invocation panicked");
                resume_unwind(payload)
            }
        }
    }

    /// Returns the captured outcome without blocking or invoking anything.
    pub fn get(&self) -> Option<R> {
        match &*self.state.lock() {
            GuardState::Fired(outcome) => Some(outcome.clone()),
            _ => None,
        }
    }
}

impl<R> Default for OnceGuard<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: fmt::Debug> fmt::Debug for OnceGuard<R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.lock() {
            GuardState::Unarmed => formatter.write_str("OnceGuard(<unarmed>)"),
            GuardState::Firing(_) => formatter.write_str("OnceGuard(<firing>)"),
            GuardState::Fired(outcome) => formatter
                .debug_tuple("OnceGuard")
                .field(outcome)
                .finish(),
            GuardState::Poisoned => formatter.write_str("OnceGuard(<poisoned>)"),
        }
    }
}
