//! crates/logging/src/threshold.rs
//! Process-wide minimum-severity state.

use std::sync::atomic::{AtomicU8, Ordering};

use crate::severity::Severity;

/// The single piece of shared mutable state in the crate. Initialized to the
/// most verbose setting at process start and only ever written through
/// [`set_level`], so the stored byte is always a valid `Severity` repr.
/// There is no ordering dependency between the threshold and any other data,
/// so relaxed loads and stores suffice.
static CURRENT: AtomicU8 = AtomicU8::new(Severity::Trace as u8);

/// Overwrites the process-wide minimum severity.
///
/// Takes effect for every subsequent call on every thread. There is no
/// validation and no error: any `Severity` is a legal threshold, including
/// [`Severity::Silence`], which suppresses all output.
pub fn set_level(level: Severity) {
    CURRENT.store(level as u8, Ordering::Relaxed);
}

/// Returns the current process-wide minimum severity.
#[must_use]
pub fn level() -> Severity {
    // Only `set_level` writes the cell, so the byte is always in range; the
    // fallback can only suppress, never un-gate.
    Severity::from_repr(CURRENT.load(Ordering::Relaxed)).unwrap_or(Severity::Silence)
}

/// Reports whether the threshold sits at the most permissive setting.
#[must_use]
pub fn is_full_open() -> bool {
    level() == Severity::Trace
}

/// Reports whether all output is suppressed.
#[must_use]
pub fn is_silence() -> bool {
    level() == Severity::Silence
}

/// The validity predicate: a call at `severity` emits iff the threshold is
/// not [`Severity::Silence`] and `severity` is at or above it.
pub(crate) fn enabled(severity: Severity) -> bool {
    !is_silence() && severity >= level()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard, PoisonError};

    /// Serializes tests that touch the process-wide threshold.
    static LEVEL_LOCK: Mutex<()> = Mutex::new(());

    pub(crate) fn lock() -> MutexGuard<'static, ()> {
        LEVEL_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[test]
    fn set_level_overwrites_and_level_reads_back() {
        let _guard = lock();

        for severity in [
            Severity::Trace,
            Severity::Info,
            Severity::Warn,
            Severity::Error,
            Severity::Silence,
        ] {
            set_level(severity);
            assert_eq!(level(), severity);
        }

        set_level(Severity::Trace);
    }

    #[test]
    fn full_open_iff_threshold_is_trace() {
        let _guard = lock();

        set_level(Severity::Trace);
        assert!(is_full_open());
        assert!(!is_silence());

        set_level(Severity::Info);
        assert!(!is_full_open());
        assert!(!is_silence());

        set_level(Severity::Trace);
    }

    #[test]
    fn silence_iff_threshold_is_silence() {
        let _guard = lock();

        set_level(Severity::Silence);
        assert!(is_silence());
        assert!(!is_full_open());

        set_level(Severity::Trace);
        assert!(!is_silence());
    }

    #[test]
    fn enabled_compares_against_the_threshold() {
        let _guard = lock();

        set_level(Severity::Warn);
        assert!(!enabled(Severity::Trace));
        assert!(!enabled(Severity::Info));
        assert!(enabled(Severity::Warn));
        assert!(enabled(Severity::Error));

        set_level(Severity::Trace);
    }

    #[test]
    fn silence_disables_every_severity() {
        let _guard = lock();

        set_level(Severity::Silence);
        assert!(!enabled(Severity::Trace));
        assert!(!enabled(Severity::Info));
        assert!(!enabled(Severity::Warn));
        assert!(!enabled(Severity::Error));

        set_level(Severity::Trace);
    }
}
