//! crates/logging/src/macros.rs
//! Variadic entry points over the slice-taking facade functions.
//!
//! The facade functions take the payload as `&[&dyn Debug]`; these macros
//! restore the variadic call shape by building that slice from any number of
//! trailing expressions.

/// Emits a trace-severity group to the process console.
///
/// # Example
/// ```
/// logging::trace!("startup", [1, 2, 3, 4], ("a", 1));
/// ```
#[macro_export]
macro_rules! trace {
    ($label:expr $(, $value:expr)* $(,)?) => {
        $crate::trace($label, &[$(&$value as &dyn ::core::fmt::Debug),*])
    };
}

/// Emits an info-severity group to the process console.
///
/// # Example
/// ```
/// logging::info!("progress", 42);
/// ```
#[macro_export]
macro_rules! info {
    ($label:expr $(, $value:expr)* $(,)?) => {
        $crate::info($label, &[$(&$value as &dyn ::core::fmt::Debug),*])
    };
}

/// Emits a warn-severity group to the process console.
///
/// # Example
/// ```
/// logging::warn!("@alert", "disk nearly full");
/// ```
#[macro_export]
macro_rules! warn {
    ($label:expr $(, $value:expr)* $(,)?) => {
        $crate::warn($label, &[$(&$value as &dyn ::core::fmt::Debug),*])
    };
}

/// Emits an error-severity group to the process console.
///
/// # Example
/// ```
/// logging::error!("request failed", 500);
/// ```
#[macro_export]
macro_rules! error {
    ($label:expr $(, $value:expr)* $(,)?) => {
        $crate::error($label, &[$(&$value as &dyn ::core::fmt::Debug),*])
    };
}
