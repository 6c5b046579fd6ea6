//! Browser helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component logic
//! so the components compile and test without a DOM.

pub mod date;
pub mod dialog;
