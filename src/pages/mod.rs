//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page is a zero-argument component: fixed content rendered through
//! the layout primitives in `components`, with head metadata injected via
//! `PageMeta`. Content lives in module-level consts so tests can assert on
//! it directly.

pub mod about;
pub mod technologies;
