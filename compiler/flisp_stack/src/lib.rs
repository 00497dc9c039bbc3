//! Stack growth guard for deeply nested expressions.
//!
//! The reader, evaluator and printer all recurse once per nesting level of
//! the value tree. Input such as `((((...))))` thousands of levels deep would
//! otherwise overflow the native stack, so each recursive step is wrapped in
//! [`ensure_sufficient_stack`].
//!
//! - **Native targets**: `stacker` allocates a new segment when the red zone
//!   is reached.
//! - **WASM targets**: passthrough.

/// Minimum stack space to keep available (128KB red zone).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn depth(value: &Value) -> usize {
///     ensure_sufficient_stack(|| match value {
///         Value::SExpr(cells) => 1 + cells.iter().map(depth).max().unwrap_or(0),
///         _ => 0,
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM version, calls `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
