//! Canvas rendering: the component registry and the renderer built on it.
//!
//! SYSTEM CONTEXT
//! ==============
//! A version's `components` list is a declarative schema of `{type, data}`
//! entries. `registry` maps type names to widgets; `renderer` walks the list
//! and hosts each widget (or a placeholder) in order.

pub mod registry;
pub mod renderer;
