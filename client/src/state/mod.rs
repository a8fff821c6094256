//! Client-side state models.
//!
//! DESIGN
//! ======
//! Each model is a plain struct held in an `RwSignal` and provided through
//! context. Async code never mutates fields directly; it calls the model's
//! `apply_*` / `finish_*` methods, which own the staleness rules.

pub mod briefing;
pub mod explore;
pub mod news;
pub mod session;
pub mod views;
pub mod workspace;
