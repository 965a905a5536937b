//! Grouped console output at every severity.
//!
//! Run with `cargo run --example grouped`. Plain labels render collapsed;
//! labels containing `@` render pre-expanded.

use logging::Severity;

fn main() {
    logging::set_level(Severity::Trace);

    let samples = [1, 2, 3, 4];

    logging::trace!("trace", samples, ("a", 1));
    logging::info!("info", samples, ("b", 2));
    logging::warn!("warn", samples, ("c", 3));
    logging::error!("error", samples, ("d", 4));

    // `@` opens the group pre-expanded.
    logging::trace!("@trace", samples);
    logging::info!("@info", samples);
    logging::warn!("@warn", samples);
    logging::error!("@error", samples);

    // Raising the threshold silences everything below it.
    logging::set_level(Severity::Warn);
    logging::info!("dropped", "this group never renders");
    logging::error!("kept", "this one does");
}
