//! Terminal output subsystem.
//!
//! # Responsibilities
//! - Map semantic labels (`Tone`) to ANSI foreground colors
//! - Wrap text in escape codes when coloring is enabled
//!
//! # Design Decisions
//! - Color choice is orthogonal to message content: callers pick a tone,
//!   never a raw escape sequence
//! - No terminal detection; codes are emitted unless explicitly disabled

pub mod color;

pub use color::{Painter, Tone};
