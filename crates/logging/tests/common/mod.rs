//! Shared helpers for facade integration tests.
//!
//! The threshold is process-wide, so tests inside one binary serialize
//! through a lock before touching it.

#![allow(dead_code)]

use std::sync::{Mutex, MutexGuard, PoisonError};

use logging::{GroupLogger, RecordingSink, Severity, SinkEvent};

static LEVEL_LOCK: Mutex<()> = Mutex::new(());

/// Grabs the threshold lock for the duration of a test.
pub fn threshold_guard() -> MutexGuard<'static, ()> {
    LEVEL_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Runs `call` against a recording sink under the given threshold and
/// returns the recorded events. Restores the default threshold afterwards.
pub fn record_at<F>(threshold: Severity, call: F) -> Vec<SinkEvent>
where
    F: FnOnce(&mut GroupLogger<RecordingSink>),
{
    let _guard = threshold_guard();
    logging::set_level(threshold);

    let mut logger = GroupLogger::new(RecordingSink::new());
    call(&mut logger);

    logging::set_level(Severity::Trace);
    logger.into_inner().take_events()
}
