//! The two display lines derived from the engine state.

use serde::Serialize;

use super::engine::CalculatorState;
use super::format::{format_number, parse_input};

/// What the presentation layer renders after every key press.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Readout {
    /// The pending expression, e.g. `"5 +"`. Empty when nothing is pending.
    pub expression: String,
    /// The input buffer verbatim.
    pub result: String,
    /// Whether the result line shows the error marker.
    pub is_error: bool,
}

impl Readout {
    /// Derive the readout from a post-operation state.
    pub fn from_state(state: &CalculatorState) -> Self {
        let mut parts = Vec::with_capacity(3);
        if let Some(accumulator) = state.accumulator {
            parts.push(format_number(accumulator));
        }
        if let Some(op) = state.operator {
            parts.push(op.symbol().to_string());
        }
        if let Some(operand) = state.pending_operand
            && !state.just_evaluated
        {
            parts.push(format_number(operand));
        }

        Self {
            expression: parts.join(" "),
            result: state.input.clone(),
            is_error: state.error,
        }
    }

    /// Get the text to copy to clipboard.
    ///
    /// A trailing decimal point is dropped so `"12."` copies as `"12"`, and
    /// a negative zero copies without its sign.
    /// Errors copy the marker itself so the user can still paste it.
    pub fn text_for_clipboard(&self) -> &str {
        if self.is_error {
            return &self.result;
        }
        let trimmed = match self.result.trim_end_matches('.') {
            "" | "-" => "0",
            trimmed => trimmed,
        };
        // Zero has no sign, as on the result line after a computation
        match trimmed.strip_prefix('-') {
            Some(unsigned) if parse_input(unsigned) == 0.0 => unsigned,
            _ => trimmed,
        }
    }
}
