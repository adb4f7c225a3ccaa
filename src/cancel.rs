//! Cooperative cancellation for long-running numeric loops.
//!
//! The engine is single-threaded and cooperative from the perspective of
//! any one computation: there is no scheduler and no asynchronous
//! suspension inside it. But the cancellation token itself may be set
//! from another thread (a signal handler, a UI thread), so it is built on
//! a shared, atomically-settable flag rather than a plain `bool`.
//!
//! Long-running inner loops (additive, multiplicative, comparison,
//! division, Newton iteration) poll [`Cancel::poll`] on every iteration.
//! When the token is set, the offending routine returns
//! [`Status::ExecSignal`](crate::error::Status::ExecSignal), leaving its
//! output in a possibly-inconsistent but safely droppable state.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::Status;

/// A shared, externally-settable flag read by arithmetic loops to
/// interrupt long computations.
///
/// Cloning a `Cancel` shares the same underlying flag: setting it
/// through one clone is observed by every other clone and by the
/// engine operations it was passed into.
#[derive(Clone, Debug, Default)]
pub struct Cancel(Arc<AtomicBool>);

impl Cancel {
    /// Creates a new, initially-clear cancellation token.
    pub fn new() -> Self {
        Cancel(Arc::new(AtomicBool::new(false)))
    }

    /// Requests cancellation of any operation currently polling this token.
    pub fn set(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Clears a previously requested cancellation.
    ///
    /// Belongs to the embedder's lifecycle, typically called between
    /// top-level statements once a cancelled computation has unwound.
    pub fn clear(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    /// Returns whether cancellation has been requested.
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Polls the token, returning `Status::ExecSignal` if cancellation
    /// has been requested.
    ///
    /// Every loop in this crate that can run for an unbounded number of
    /// iterations calls this once per iteration.
    pub fn poll(&self) -> Result<(), Status> {
        if self.is_set() {
            Err(Status::ExecSignal)
        } else {
            Ok(())
        }
    }
}
