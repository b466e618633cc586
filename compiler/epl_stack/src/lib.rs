//! Stack growth for the few recursive tree walks left in the interpreters.
//!
//! Evaluation itself never recurses natively: the continuation machine in
//! `epl_eval` runs as a trampoline. Rendering an expression, building its
//! printable tree, or computing the layer an expression needs still follow
//! the shape of the tree, so very deep trees (long `begin ... end` chains built
//! by a generator, nested `let`s) get extra stack on demand here.
//!
//! On wasm the guard is a plain call.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each freshly allocated stack segment (1MB).
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone is left.
///
/// ```text
/// fn depth(expr: &Expr) -> usize {
///     ensure_sufficient_stack(|| 1 + expr.children().iter().map(|c| depth(c)).max().unwrap_or(0))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// wasm manages its own stack; call straight through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
