//! Keypad calculator engine.
//!
//! This module provides functionality to:
//! - Track operands, the pending operator and the typed input across key presses
//! - Format results for the display
//! - Derive the expression and result lines shown to the user
//! - Copy results to the clipboard

mod clipboard;
mod engine;
mod format;
mod operator;
mod readout;

pub use clipboard::copy_to_clipboard;
pub use engine::{Calculator, Key};
pub use operator::Operator;
pub use readout::Readout;
