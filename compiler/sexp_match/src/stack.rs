//! Stack growth for the recursive walkers.
//!
//! A match recurses once per tree level and once per list position, so a
//! deeply nested or very long subject can exhaust the thread's stack. Each
//! walker step runs under [`ensure_sufficient_stack`], which moves onto a
//! freshly allocated segment when the remaining stack drops below the red
//! zone.
//!
//! On `wasm32` the guard calls straight through.

/// Grow when less than this much stack is left (100KB).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment (1MB).
#[cfg(not(target_arch = "wasm32"))]
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first switching to a new stack segment if the current one is
/// nearly exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
