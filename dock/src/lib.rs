//! Docking layout model for the dashboard workspace.
//!
//! The model owns tab groups ("tab sets"), the tabs inside them, and which tab
//! set is active. Hosts never mutate it directly: they send [`Action`]s through
//! [`Layout::do_action`], which lets a host intercept the action stream, apply
//! it, and then read the model's own resulting selection back. There is no
//! rendering here; the `client` crate draws tab strips from the model.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`layout`] | [`Layout`] / [`TabSet`] / [`TabNode`] and action application |
//! | [`action`] | The [`Action`] enum hosts dispatch |

pub mod action;
pub mod layout;

pub use action::Action;
pub use layout::{Layout, TabNode, TabSet};

/// Error returned by [`Layout::do_action`] and [`Layout::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("unknown tab: {0}")]
    UnknownTab(String),
    #[error("unknown tab set: {0}")]
    UnknownTabSet(String),
    #[error("duplicate tab id: {0}")]
    DuplicateTab(String),
    #[error("tab is not closeable: {0}")]
    NotCloseable(String),
    #[error("invalid layout json: {0}")]
    Json(#[from] serde_json::Error),
}
