//! Cancellation tokens for selection-scoped requests.
//!
//! A token is minted per chat selection. Cancelling it aborts the underlying
//! `fetch` calls (hydrate builds) and flips a flag the caller checks before
//! applying results, so a superseded selection can never write state.

#[cfg(test)]
#[path = "cancel_test.rs"]
mod cancel_test;

use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Rc<Cell<bool>>,
    #[cfg(feature = "hydrate")]
    controller: Option<web_sys::AbortController>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cancelled: Rc::new(Cell::new(false)),
            #[cfg(feature = "hydrate")]
            controller: web_sys::AbortController::new().ok(),
        }
    }

    /// Abort in-flight requests and mark the token cancelled. Idempotent.
    pub fn cancel(&self) {
        if self.cancelled.replace(true) {
            return;
        }
        #[cfg(feature = "hydrate")]
        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    /// Signal to attach to a `fetch` request.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn signal(&self) -> Option<web_sys::AbortSignal> {
        self.controller.as_ref().map(web_sys::AbortController::signal)
    }
}
