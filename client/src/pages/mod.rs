//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The dashboard is the only route; everything else is a tab inside it.

pub mod dashboard;
