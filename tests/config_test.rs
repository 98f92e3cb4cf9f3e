use std::sync::{Mutex, MutexGuard};

use workitems::config::Config;

// Tests in one binary run in parallel; serialize the ones touching env vars.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_guard() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[test]
fn config_defaults_when_env_is_empty() {
    let _guard = env_guard();
    unsafe {
        std::env::remove_var("LOG_LEVEL");
        std::env::remove_var("WORKITEMS_EVENT_CAP");
    }

    let config = Config::from_env().unwrap();
    assert_eq!(config.log_level, "info");
    assert!(config.event_cap.is_none());
}

#[test]
fn config_reads_event_cap() {
    let _guard = env_guard();
    unsafe {
        std::env::set_var("WORKITEMS_EVENT_CAP", "256");
    }

    let config = Config::from_env().unwrap();
    assert_eq!(config.event_cap, Some(256));

    // Clean up
    unsafe {
        std::env::remove_var("WORKITEMS_EVENT_CAP");
    }
}

#[test]
fn config_rejects_non_unicode_event_cap() {
    use std::os::unix::ffi::OsStrExt;

    let _guard = env_guard();
    unsafe {
        std::env::set_var(
            "WORKITEMS_EVENT_CAP",
            std::ffi::OsStr::from_bytes(b"\xff\xfe"),
        );
    }

    let result = Config::from_env();
    assert!(result.is_err());

    unsafe {
        std::env::remove_var("WORKITEMS_EVENT_CAP");
    }
}

#[test]
fn config_rejects_malformed_event_cap() {
    let _guard = env_guard();
    unsafe {
        std::env::set_var("WORKITEMS_EVENT_CAP", "lots");
    }

    let result = Config::from_env();
    assert!(result.is_err());

    unsafe {
        std::env::remove_var("WORKITEMS_EVENT_CAP");
    }
}
