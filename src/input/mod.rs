//! Keyboard input mapping.
//!
//! Turns typed key sequences into engine [`Key`](crate::calculator::Key)s.

mod keys;

pub use keys::parse_sequence;
