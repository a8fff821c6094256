//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure functions only: number formatting, chart geometry, and Markdown
//! rendering, kept out of components so they can be unit tested natively.

pub mod chart_math;
pub mod format;
pub mod markdown;
