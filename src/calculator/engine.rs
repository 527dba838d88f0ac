//! The keypad state machine.
//!
//! [`Calculator`] owns a [`CalculatorState`] and mutates it one key press at
//! a time. Operators chain eagerly (`5 + 3 *` evaluates `5 + 3` before
//! starting the multiplication) and a repeated equals re-applies the last
//! right-hand operand. A non-finite result puts the engine into an error
//! state in which every key except clear is ignored.

use super::format::{ERROR_MARKER, format_number, parse_input};
use super::operator::{CalcError, Operator};
use super::readout::Readout;

/// A single key press forwarded by the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// A decimal digit, `0..=9`.
    Digit(u8),
    Dot,
    ToggleSign,
    Percent,
    Backspace,
    Operator(Operator),
    Equals,
    Clear,
}

/// Everything the engine remembers between key presses.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorState {
    /// Left-hand operand of the pending operation.
    pub accumulator: Option<f64>,
    /// Right-hand operand cached for repeated equals.
    pub pending_operand: Option<f64>,
    pub operator: Option<Operator>,
    /// The numeral being typed, or [`ERROR_MARKER`].
    pub input: String,
    pub just_evaluated: bool,
    pub error: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            accumulator: None,
            pending_operand: None,
            operator: None,
            input: "0".to_string(),
            just_evaluated: false,
            error: false,
        }
    }
}

/// The arithmetic engine.
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    state: CalculatorState,
}

impl Calculator {
    /// Create an engine in the zero state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Derive the two display lines from the current state.
    pub fn readout(&self) -> Readout {
        Readout::from_state(&self.state)
    }

    pub fn is_error(&self) -> bool {
        self.state.error
    }

    /// Dispatch a key to the matching operation.
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(d) => self.digit(d),
            Key::Dot => self.dot(),
            Key::ToggleSign => self.toggle_sign(),
            Key::Percent => self.percent(),
            Key::Backspace => self.backspace(),
            Key::Operator(op) => self.choose_operator(op),
            Key::Equals => self.equals(),
            Key::Clear => self.clear(),
        }
    }

    /// Append a digit to the input, collapsing a lone leading zero.
    pub fn digit(&mut self, d: u8) {
        let Some(ch) = char::from_digit(u32::from(d), 10) else {
            tracing::warn!("ignoring out-of-range digit {}", d);
            return;
        };

        self.reset_for_new_entry();

        let input = &mut self.state.input;
        match input.as_str() {
            "0" => *input = ch.to_string(),
            "-0" => *input = format!("-{}", ch),
            _ => input.push(ch),
        }
    }

    /// Append a decimal point unless the input already has one.
    pub fn dot(&mut self) {
        self.reset_for_new_entry();

        if !self.state.input.contains('.') {
            self.state.input.push('.');
        }
    }

    /// Flip the sign of the input. Zero has no sign.
    pub fn toggle_sign(&mut self) {
        if self.state.error {
            return;
        }

        let input = &mut self.state.input;
        if input.as_str() == "0" || input.as_str() == "0." {
            return;
        }

        if input.starts_with('-') {
            input.remove(0);
        } else {
            input.insert(0, '-');
        }
    }

    /// Divide the input by 100.
    pub fn percent(&mut self) {
        if self.state.error {
            return;
        }

        let value = parse_input(&self.state.input) / 100.0;
        self.state.input = format_number(value);
        if self.state.input == ERROR_MARKER {
            tracing::debug!("percent of non-finite input");
            self.state.error = true;
            self.state.accumulator = None;
            self.state.pending_operand = None;
            self.state.operator = None;
        }
    }

    /// Remove the last typed character.
    pub fn backspace(&mut self) {
        if self.state.error || self.state.just_evaluated {
            return;
        }

        let input = &mut self.state.input;
        if input.len() <= 1 || (input.len() == 2 && input.starts_with('-')) {
            *input = "0".to_string();
            return;
        }

        input.pop();
        if input.as_str() == "-" {
            *input = "0".to_string();
        }
    }

    /// Select a binary operator, evaluating any pending one first.
    pub fn choose_operator(&mut self, op: Operator) {
        if self.state.error {
            return;
        }

        let n = parse_input(&self.state.input);

        // Continue a fresh chain from the displayed result
        if self.state.just_evaluated {
            self.state.just_evaluated = false;
            self.state.pending_operand = None;
        }

        let Some(accumulator) = self.state.accumulator else {
            self.state.accumulator = Some(n);
            self.state.operator = Some(op);
            self.state.input = "0".to_string();
            return;
        };

        match self.state.operator {
            Some(pending) if self.state.input != "0" => match pending.apply(accumulator, n) {
                Ok(result) => {
                    tracing::debug!(
                        "chained {} {} {} = {}",
                        accumulator,
                        pending.symbol(),
                        n,
                        result
                    );
                    self.state.accumulator = Some(result);
                    self.state.operator = Some(op);
                    self.state.pending_operand = None;
                    self.state.input = "0".to_string();
                }
                Err(err) => self.enter_error(err),
            },
            // No new operand typed: the user changed their mind about the operator
            _ => self.state.operator = Some(op),
        }
    }

    /// Evaluate the pending operation.
    ///
    /// Pressing equals again re-applies the previous right-hand operand.
    pub fn equals(&mut self) {
        if self.state.error {
            return;
        }
        let (Some(accumulator), Some(op)) = (self.state.accumulator, self.state.operator) else {
            return;
        };

        let n = parse_input(&self.state.input);
        let rhs = if self.state.just_evaluated {
            self.state.pending_operand.unwrap_or(n)
        } else {
            n
        };

        match op.apply(accumulator, rhs) {
            Ok(result) => {
                self.state.pending_operand = Some(rhs);
                self.state.accumulator = Some(result);
                self.state.input = format_number(result);
                self.state.just_evaluated = true;
            }
            Err(err) => self.enter_error(err),
        }
    }

    /// Reset to the zero state.
    pub fn clear(&mut self) {
        self.state = CalculatorState::default();
    }

    /// Typing after an error or a result starts over.
    fn reset_for_new_entry(&mut self) {
        if self.state.error || self.state.just_evaluated {
            self.clear();
        }
    }

    fn enter_error(&mut self, err: CalcError) {
        tracing::debug!("{}", err);
        self.state.error = true;
        self.state.input = ERROR_MARKER.to_string();
        self.state.accumulator = None;
        self.state.pending_operand = None;
        self.state.operator = None;
    }
}
