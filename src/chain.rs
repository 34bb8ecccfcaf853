// src/chain.rs
// Sticky failure tracking shared by every assertion of a response

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::failure::{Failure, FailureKind};
use crate::reporter::Reporter;

struct ChainState {
    reporter: Rc<dyn Reporter>,
    failed: Cell<bool>,
    kind: Cell<Option<FailureKind>>,
}

/// Failure state of one assertion sequence.
///
/// Cloning a chain hands out another handle to the same state: every
/// assertion object derived from a response holds such a handle, so failing
/// any of them fails them all. The first failure is reported; the chain then
/// stays failed until [`Chain::reset`] and every later assertion is a no-op.
#[derive(Clone)]
pub struct Chain {
    state: Rc<ChainState>,
}

impl Chain {
    pub fn new(reporter: Rc<dyn Reporter>) -> Self {
        Self {
            state: Rc::new(ChainState {
                reporter,
                failed: Cell::new(false),
                kind: Cell::new(None),
            }),
        }
    }

    /// Creates a chain that is already failed without reporting anything.
    /// Useful for building placeholder objects by hand.
    pub fn failed(reporter: Rc<dyn Reporter>) -> Self {
        let chain = Self::new(reporter);
        chain.state.failed.set(true);
        chain
    }

    pub fn is_failed(&self) -> bool {
        self.state.failed.get()
    }

    /// Kind of the failure that moved the chain into the failed state.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        self.state.kind.get()
    }

    pub fn fail(&self, failure: Failure) {
        if self.state.failed.replace(true) {
            log::warn!("chain already failed, dropping: {}", failure);
            return;
        }
        self.state.kind.set(Some(failure.kind));
        self.state.reporter.report(&failure.to_string());
    }

    /// Fails with `failure()` unless `ok` holds. Nothing is evaluated on a
    /// chain that is already failed.
    pub(crate) fn check(&self, ok: impl FnOnce() -> bool, failure: impl FnOnce() -> Failure) {
        if self.is_failed() {
            return;
        }
        if !ok() {
            self.fail(failure());
        }
    }

    /// Returns the chain to the OK state. Meant for test harnesses that run
    /// several scenarios against one response.
    pub fn reset(&self) {
        log::debug!("resetting chain");
        self.state.failed.set(false);
        self.state.kind.set(None);
    }

    pub fn assert_ok(&self) {
        if let Some(kind) = self.failure_kind() {
            panic!("expected chain to be OK, but it failed with {}", kind);
        }
        if self.is_failed() {
            panic!("expected chain to be OK, but it is failed");
        }
    }

    pub fn assert_failed(&self) {
        if !self.is_failed() {
            panic!("expected chain to be failed, but it is OK");
        }
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("failed", &self.is_failed())
            .field("kind", &self.failure_kind())
            .finish()
    }
}
