//! Flat configuration record with chained setters.
//!
//! [`Options`] gathers the settings a client or worker typically needs:
//! addressing, timeouts, retry parameters, sizing, TLS and credentials, plus
//! callback slots for results. Every setter consumes and returns the record,
//! so a configuration reads as a single chain.
//!
//! Settings are only stored. Nothing in this module opens connections,
//! schedules retries or sizes pools.
//!
//! # Examples
//!
//! ```rust
//! use busters::function::Consumer;
//! use busters::options::Options;
//! use std::time::Duration;
//!
//! let options: Options<u64> = Options::new()
//!     .with_address("db.internal", 5432)
//!     .with_timeout(Duration::from_secs(5))
//!     .with_retry(3, Duration::from_millis(200))
//!     .with_pool_size(16)
//!     .with_on_success(Consumer::new(|rows: u64| println!("{rows} rows")));
//!
//! assert_eq!(options.host, "db.internal");
//! assert_eq!(options.retry.max_retry_times, 3);
//! options.notify(Ok(12));
//! ```

use std::fmt;
use std::time::Duration;

use crate::function::{Consumer, FunctionError, OnResult};

// =============================================================================
// Option Groups
// =============================================================================

/// Retry parameters.
///
/// Stored for the consumer of the configuration; no retry is ever performed
/// by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RetryPolicy {
    /// Maximum number of retries after the first attempt.
    pub max_retry_times: u32,
    /// Delay between attempts.
    pub retry_interval: Duration,
}

/// Certificate, key and CA file paths for TLS.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TlsFiles {
    /// Certificate file path.
    pub cert_file: String,
    /// Private key file path.
    pub key_file: String,
    /// CA bundle file path.
    pub ca_file: String,
}

/// Username and password authentication.
#[derive(Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Credentials {
    /// User name.
    pub username: String,
    /// Password.
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

// =============================================================================
// Options
// =============================================================================

/// A configuration record.
///
/// # Type Parameters
///
/// * `R` - The success value passed to `on_success` and `on_result`
/// * `E` - The error passed to `on_error` and `on_result`
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, bound = ""))]
pub struct Options<R = (), E = FunctionError> {
    /// Host name.
    pub host: String,
    /// Port.
    pub port: u16,
    /// Endpoint URL.
    pub url: String,
    /// Server addresses.
    pub servers: Vec<String>,
    /// Operation timeout.
    pub timeout: Duration,
    /// Retry parameters.
    pub retry: RetryPolicy,
    /// Keep-alive interval.
    pub keep_alive: Duration,
    /// Buffer size.
    pub buffer_size: usize,
    /// Priority; 0 is the top priority.
    pub priority: i32,
    /// Capacity.
    pub capacity: usize,
    /// Queue size.
    pub queue_size: usize,
    /// Pool size.
    pub pool_size: usize,
    /// TLS files; `None` when TLS is disabled.
    pub tls: Option<TlsFiles>,
    /// Username and password; `None` when not configured.
    pub credentials: Option<Credentials>,
    /// Bearer token; `None` when not configured.
    pub token: Option<String>,
    /// Called with every error passed to [`Options::notify`].
    #[cfg_attr(feature = "serde", serde(skip))]
    pub on_error: Consumer<E>,
    /// Called with every success value passed to [`Options::notify`].
    #[cfg_attr(feature = "serde", serde(skip))]
    pub on_success: Consumer<R>,
    /// Called with every outcome passed to [`Options::notify`].
    #[cfg_attr(feature = "serde", serde(skip))]
    pub on_result: OnResult<R, E>,
}

impl<R, E> Options<R, E> {
    /// Creates a record with zero values and empty callbacks.
    pub fn new() -> Self {
        Self {
            host: String::new(),
            port: 0,
            url: String::new(),
            servers: Vec::new(),
            timeout: Duration::ZERO,
            retry: RetryPolicy::default(),
            keep_alive: Duration::ZERO,
            buffer_size: 0,
            priority: 0,
            capacity: 0,
            queue_size: 0,
            pool_size: 0,
            tls: None,
            credentials: None,
            token: None,
            on_error: Consumer::empty(),
            on_success: Consumer::empty(),
            on_result: Consumer::empty(),
        }
    }

    /// Sets the host name and port.
    #[must_use]
    pub fn with_address(mut self, host: impl Into<String>, port: u16) -> Self {
        self.host = host.into();
        self.port = port;
        self
    }

    /// Sets the endpoint URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the server address list.
    #[must_use]
    pub fn with_servers<I, S>(mut self, servers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.servers = servers.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the operation timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the retry parameters.
    #[must_use]
    pub const fn with_retry(mut self, max_retry_times: u32, retry_interval: Duration) -> Self {
        self.retry = RetryPolicy {
            max_retry_times,
            retry_interval,
        };
        self
    }

    /// Sets the keep-alive interval.
    #[must_use]
    pub const fn with_keep_alive(mut self, keep_alive: Duration) -> Self {
        self.keep_alive = keep_alive;
        self
    }

    /// Sets the buffer size.
    #[must_use]
    pub const fn with_buffer(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    /// Sets the priority; 0 is the top priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the capacity.
    #[must_use]
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the queue size.
    #[must_use]
    pub const fn with_queue_size(mut self, queue_size: usize) -> Self {
        self.queue_size = queue_size;
        self
    }

    /// Sets the pool size.
    #[must_use]
    pub const fn with_pool_size(mut self, pool_size: usize) -> Self {
        self.pool_size = pool_size;
        self
    }

    /// Enables TLS with the given certificate, key and CA files.
    #[must_use]
    pub fn with_tls(
        mut self,
        cert_file: impl Into<String>,
        key_file: impl Into<String>,
        ca_file: impl Into<String>,
    ) -> Self {
        self.tls = Some(TlsFiles {
            cert_file: cert_file.into(),
            key_file: key_file.into(),
            ca_file: ca_file.into(),
        });
        self
    }

    /// Sets username and password authentication.
    #[must_use]
    pub fn with_username_password(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.credentials = Some(Credentials {
            username: username.into(),
            password: password.into(),
        });
        self
    }

    /// Sets a bearer token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Sets the error callback.
    #[must_use]
    pub fn with_on_error(mut self, on_error: Consumer<E>) -> Self {
        self.on_error = on_error;
        self
    }

    /// Sets the success callback.
    #[must_use]
    pub fn with_on_success(mut self, on_success: Consumer<R>) -> Self {
        self.on_success = on_success;
        self
    }

    /// Sets the outcome callback.
    #[must_use]
    pub fn with_on_result(mut self, on_result: OnResult<R, E>) -> Self {
        self.on_result = on_result;
        self
    }

    /// Returns `true` if TLS is configured.
    pub const fn has_tls(&self) -> bool {
        self.tls.is_some()
    }

    /// Returns `true` if username and password are configured.
    pub const fn has_auth(&self) -> bool {
        self.credentials.is_some()
    }

    /// Returns `true` if a token is configured.
    pub const fn has_token(&self) -> bool {
        self.token.is_some()
    }
}

impl<R: Clone, E: Clone> Options<R, E> {
    /// Routes an outcome to the configured callbacks.
    ///
    /// `on_result` receives the whole outcome first, then `on_success` or
    /// `on_error` receives its payload. Empty callbacks are skipped.
    pub fn notify(&self, result: Result<R, E>) {
        self.on_result.apply(result.clone());
        match result {
            Ok(value) => self.on_success.apply(value),
            Err(error) => self.on_error.apply(error),
        }
    }
}

impl<R, E> Default for Options<R, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, E> Clone for Options<R, E> {
    fn clone(&self) -> Self {
        Self {
            host: self.host.clone(),
            port: self.port,
            url: self.url.clone(),
            servers: self.servers.clone(),
            timeout: self.timeout,
            retry: self.retry,
            keep_alive: self.keep_alive,
            buffer_size: self.buffer_size,
            priority: self.priority,
            capacity: self.capacity,
            queue_size: self.queue_size,
            pool_size: self.pool_size,
            tls: self.tls.clone(),
            credentials: self.credentials.clone(),
            token: self.token.clone(),
            on_error: self.on_error.clone(),
            on_success: self.on_success.clone(),
            on_result: self.on_result.clone(),
        }
    }
}

impl<R, E> fmt::Debug for Options<R, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Options")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("url", &self.url)
            .field("servers", &self.servers)
            .field("timeout", &self.timeout)
            .field("retry", &self.retry)
            .field("keep_alive", &self.keep_alive)
            .field("buffer_size", &self.buffer_size)
            .field("priority", &self.priority)
            .field("capacity", &self.capacity)
            .field("queue_size", &self.queue_size)
            .field("pool_size", &self.pool_size)
            .field("tls", &self.tls)
            .field("credentials", &self.credentials)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("on_error", &self.on_error)
            .field("on_success", &self.on_success)
            .field("on_result", &self.on_result)
            .finish()
    }
}
