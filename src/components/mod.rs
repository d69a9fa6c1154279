//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome for the informational pages: the layout
//! primitives, the scoped head-metadata utility, and the outbound-link
//! anchor. None of them hold state.

pub mod external_link;
pub mod layout;
pub mod page_meta;
