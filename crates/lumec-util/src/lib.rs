//! lumec-util - Core Utilities and Foundation Types
//!
//! This crate provides the foundation types shared by the lumec compiler
//! phases: source position tracking and caret diagnostics.
//!
//! # Module Structure
//!
//! - [`position`] - Source position tracking (file, line, column)
//! - [`diagnostic`] - Human-readable diagnostic rendering

pub mod diagnostic;
pub mod position;

pub use diagnostic::Diagnostic;
pub use position::SourcePosition;
