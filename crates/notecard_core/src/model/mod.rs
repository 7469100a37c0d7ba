//! Domain model for the notes widget.
//!
//! # Responsibility
//! - Define the canonical `Note` record persisted in the notes slot.
//!
//! # Invariants
//! - Notes are append/delete only; there is no in-place edit path.
//! - Categories are plain strings, not managed entities.

pub mod note;
