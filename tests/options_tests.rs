#![cfg(feature = "options")]
//! Tests for the Options configuration record.

use busters::function::{Consumer, FunctionError};
use busters::options::{Credentials, Options, RetryPolicy, TlsFiles};
use rstest::rstest;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

// =============================================================================
// Builder Chain
// =============================================================================

#[rstest]
fn builder_chain_sets_every_field() {
    let options: Options<i32> = Options::new()
        .with_address("address", 888)
        .with_timeout(Duration::from_secs(1))
        .with_retry(1, Duration::from_secs(1))
        .with_priority(1)
        .with_capacity(1)
        .with_buffer(1)
        .with_servers(["a", "b"])
        .with_keep_alive(Duration::from_secs(1))
        .with_pool_size(1)
        .with_queue_size(4)
        .with_url("https://example.com/api")
        .with_tls("cert.pem", "key.pem", "ca.pem")
        .with_on_error(Consumer::new(|error: FunctionError| eprintln!("{error}")))
        .with_on_success(Consumer::new(|value: i32| println!("{value}")));

    assert_eq!(options.host, "address");
    assert_eq!(options.port, 888);
    assert_eq!(options.timeout, Duration::from_secs(1));
    assert_eq!(
        options.retry,
        RetryPolicy {
            max_retry_times: 1,
            retry_interval: Duration::from_secs(1),
        }
    );
    assert_eq!(options.priority, 1);
    assert_eq!(options.capacity, 1);
    assert_eq!(options.buffer_size, 1);
    assert_eq!(options.servers, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(options.keep_alive, Duration::from_secs(1));
    assert_eq!(options.pool_size, 1);
    assert_eq!(options.queue_size, 4);
    assert_eq!(options.url, "https://example.com/api");
    assert_eq!(
        options.tls,
        Some(TlsFiles {
            cert_file: "cert.pem".to_string(),
            key_file: "key.pem".to_string(),
            ca_file: "ca.pem".to_string(),
        })
    );
    assert!(options.has_tls());
    assert!(!options.on_error.is_empty());
    assert!(!options.on_success.is_empty());
    assert!(options.on_result.is_empty());
}

#[rstest]
fn later_setter_overrides_earlier_one() {
    let options: Options = Options::new()
        .with_address("first", 1)
        .with_address("second", 2)
        .with_pool_size(4)
        .with_pool_size(8);

    assert_eq!(options.host, "second");
    assert_eq!(options.port, 2);
    assert_eq!(options.pool_size, 8);
}

#[rstest]
fn with_servers_accepts_owned_strings() {
    let servers = vec!["10.0.0.1:9092".to_string(), "10.0.0.2:9092".to_string()];
    let options: Options = Options::new().with_servers(servers.clone());
    assert_eq!(options.servers, servers);
}

// =============================================================================
// Authentication
// =============================================================================

#[rstest]
fn username_password_sets_has_auth() {
    let options: Options = Options::new().with_username_password("admin", "secret");
    assert!(options.has_auth());
    assert_eq!(
        options.credentials,
        Some(Credentials {
            username: "admin".to_string(),
            password: "secret".to_string(),
        })
    );
}

#[rstest]
#[case("")]
#[case("eyJhbGciOiJIUzI1NiJ9")]
fn token_sets_has_token(#[case] token: &str) {
    let options: Options = Options::new().with_token(token);
    assert!(options.has_token());
    assert_eq!(options.token.as_deref(), Some(token));
}

#[rstest]
fn default_has_no_security_settings() {
    let options: Options = Options::default();
    assert!(!options.has_tls());
    assert!(!options.has_auth());
    assert!(!options.has_token());
}

// =============================================================================
// Callbacks
// =============================================================================

#[rstest]
fn notify_success_runs_on_result_then_on_success() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let result_log = Arc::clone(&log);
    let success_log = Arc::clone(&log);
    let errors = Arc::new(AtomicUsize::new(0));
    let error_count = Arc::clone(&errors);

    let options: Options<u32> = Options::new()
        .with_on_result(Consumer::new(move |result: Result<u32, FunctionError>| {
            result_log.lock().unwrap().push(format!("{result:?}"));
        }))
        .with_on_success(Consumer::new(move |value: u32| {
            success_log.lock().unwrap().push(format!("success {value}"));
        }))
        .with_on_error(Consumer::new(move |_: FunctionError| {
            error_count.fetch_add(1, Ordering::SeqCst);
        }));

    options.notify(Ok(3));

    assert_eq!(*log.lock().unwrap(), vec!["Ok(3)", "success 3"]);
    assert_eq!(errors.load(Ordering::SeqCst), 0);
}

#[rstest]
fn notify_error_reaches_on_error_only() {
    let successes = Arc::new(AtomicUsize::new(0));
    let success_count = Arc::clone(&successes);
    let errors = Arc::new(Mutex::new(Vec::new()));
    let error_log = Arc::clone(&errors);

    let options: Options<u32> = Options::new()
        .with_on_success(Consumer::new(move |_: u32| {
            success_count.fetch_add(1, Ordering::SeqCst);
        }))
        .with_on_error(Consumer::new(move |error: FunctionError| {
            error_log.lock().unwrap().push(error.to_string());
        }));

    options.notify(Err(FunctionError::message("timed out")));

    assert_eq!(successes.load(Ordering::SeqCst), 0);
    assert_eq!(*errors.lock().unwrap(), vec!["timed out"]);
}

#[rstest]
fn once_guarded_callback_fires_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counted = Arc::clone(&calls);
    let options: Options<u32> = Options::new().with_on_error(
        Consumer::new(move |_: FunctionError| {
            counted.fetch_add(1, Ordering::SeqCst);
        })
        .once(),
    );

    options.notify(Err(FunctionError::message("first")));
    options.notify(Err(FunctionError::message("second")));

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[rstest]
fn clone_shares_callbacks() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counted = Arc::clone(&calls);
    let options: Options<u32> = Options::new()
        .with_pool_size(2)
        .with_on_success(Consumer::new(move |_: u32| {
            counted.fetch_add(1, Ordering::SeqCst);
        }));
    let cloned = options.clone();

    options.notify(Ok(1));
    cloned.notify(Ok(2));

    assert_eq!(cloned.pool_size, 2);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

// =============================================================================
// Debug
// =============================================================================

#[rstest]
fn debug_lists_settings_and_callback_state() {
    let options: Options = Options::new()
        .with_address("localhost", 6379)
        .with_on_success(Consumer::new(|(): ()| {}));
    let debug_string = format!("{options:?}");

    assert!(debug_string.contains("Options"));
    assert!(debug_string.contains("localhost"));
    assert!(debug_string.contains("6379"));
    assert!(debug_string.contains("on_success: Consumer { empty: false }"));
    assert!(debug_string.contains("on_error: Consumer { empty: true }"));
}
