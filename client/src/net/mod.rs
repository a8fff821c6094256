//! Networking: REST helpers plus the controllers that sequence them.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues one HTTP call per function, `cancel` wraps `AbortController`
//! for selection-scoped requests, `session_sync` drives the chat/version
//! state machine on top of both, and `feeds` loads the news and briefing
//! views.

pub mod api;
pub mod cancel;
pub mod feeds;
pub mod session_sync;

use std::future::Future;

/// Run a request future on the browser event loop. Server renders never issue
/// API calls, so the future is dropped there.
pub(crate) fn spawn(fut: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "hydrate"))]
    drop(fut);
}
