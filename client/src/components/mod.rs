//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Chrome components (`sidebar`, `dock_host`, `error_banner`) and the canvas
//! view's session controls read shared state from context. Everything under
//! `widgets` is purely presentational.

pub mod chat_list;
pub mod dock_host;
pub mod error_banner;
pub mod message_list;
pub mod prompt_bar;
pub mod sidebar;
pub mod version_strip;
pub mod widgets;
