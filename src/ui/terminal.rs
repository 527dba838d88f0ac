//! Line-oriented terminal front-end for the calculator.
//!
//! Each input line is a key sequence. The display is printed after every
//! line, or after every key when tracing is on.

use crate::calculator::{Calculator, Key, Readout, copy_to_clipboard};
use crate::config::Config;
use crate::input::parse_sequence;
use std::io::{self, BufRead, Write};

/// Command that copies the result line to the clipboard.
const COPY_COMMAND: &str = ":copy";
/// Commands that end the interactive loop.
const QUIT_COMMANDS: &[&str] = &[":quit", ":q"];

/// What the loop should do after a line has been handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineOutcome {
    Continue,
    Quit,
}

/// A calculator bound to an output stream.
pub struct Session<W: Write> {
    calculator: Calculator,
    config: Config,
    trace: bool,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(config: Config, trace: bool, out: W) -> Self {
        Self {
            calculator: Calculator::new(),
            config,
            trace,
            out,
        }
    }

    /// The display lines for the current state.
    pub fn readout(&self) -> Readout {
        self.calculator.readout()
    }

    /// Press keys in order, rendering after each one when tracing.
    pub fn press_all(&mut self, keys: &[Key]) -> io::Result<()> {
        for &key in keys {
            self.calculator.press(key);
            tracing::debug!("{:?} -> {:?}", key, self.calculator.state());

            if key == Key::Equals && self.config.copy_on_equals && !self.calculator.is_error() {
                self.copy_result();
            }
            if self.trace {
                self.render()?;
            }
        }
        Ok(())
    }

    /// Handle one line of interactive input.
    ///
    /// Unknown keys are skipped with a warning.
    pub fn handle_line(&mut self, line: &str) -> io::Result<LineOutcome> {
        let line = line.trim();

        if QUIT_COMMANDS.contains(&line) {
            return Ok(LineOutcome::Quit);
        }
        if line == COPY_COMMAND {
            self.copy_result();
            return Ok(LineOutcome::Continue);
        }

        let mut keys = Vec::new();
        for parsed in parse_sequence(line) {
            match parsed {
                Ok(key) => keys.push(key),
                Err(err) => {
                    tracing::warn!("{}", err);
                    writeln!(self.out, "! {}", err)?;
                }
            }
        }

        self.press_all(&keys)?;
        if !self.trace && !keys.is_empty() {
            self.render()?;
        }
        Ok(LineOutcome::Continue)
    }

    /// Print the expression line (if enabled) and the result line.
    pub fn render(&mut self) -> io::Result<()> {
        let readout = self.readout();
        if self.config.show_expression {
            writeln!(self.out, "  {}", readout.expression)?;
        }
        writeln!(self.out, "= {}", readout.result)?;
        self.out.flush()
    }

    /// Print the readout as a JSON object.
    pub fn render_json(&mut self) -> io::Result<()> {
        let json = serde_json::to_string_pretty(&self.readout())?;
        writeln!(self.out, "{}", json)?;
        self.out.flush()
    }

    pub fn is_tracing(&self) -> bool {
        self.trace
    }

    fn copy_result(&self) {
        let readout = self.readout();
        if let Err(err) = copy_to_clipboard(readout.text_for_clipboard()) {
            tracing::warn!("{}", err);
        }
    }

    /// Run the interactive loop until EOF or a quit command.
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        self.render()?;
        self.prompt()?;

        for line in input.lines() {
            if self.handle_line(&line?)? == LineOutcome::Quit {
                break;
            }
            self.prompt()?;
        }
        Ok(())
    }

    fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "{}", self.config.prompt)?;
        self.out.flush()
    }

    #[cfg(test)]
    fn output(&self) -> &W {
        &self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Operator;

    fn session(trace: bool) -> Session<Vec<u8>> {
        Session::new(Config::default(), trace, Vec::new())
    }

    fn text(session: &Session<Vec<u8>>) -> String {
        String::from_utf8(session.output().clone()).unwrap()
    }

    #[test]
    fn test_line_renders_once() {
        let mut session = session(false);
        session.handle_line("5+3").unwrap();
        assert_eq!(text(&session), "  5 +\n= 3\n");
    }

    #[test]
    fn test_trace_renders_every_key() {
        let mut session = session(true);
        session.handle_line("2*4=").unwrap();
        assert_eq!(text(&session), "  \n= 2\n  2 *\n= 0\n  2 *\n= 4\n  8 *\n= 8\n");
    }

    #[test]
    fn test_hidden_expression() {
        let config = Config {
            show_expression: false,
            ..Config::default()
        };
        let mut session = Session::new(config, false, Vec::new());
        session.handle_line("9-4==").unwrap();
        assert_eq!(text(&session), "= 1\n");
    }

    #[test]
    fn test_unknown_keys_are_skipped() {
        let mut session = session(false);
        session.handle_line("1x2").unwrap();
        assert_eq!(session.readout().result, "12");
        assert!(text(&session).starts_with("! unknown key: \"x\"\n"));
    }

    #[test]
    fn test_state_persists_across_lines() {
        let mut session = session(false);
        session.handle_line("12").unwrap();
        session.handle_line("<Sign>").unwrap();
        session.handle_line("+ 2 <Enter>").unwrap();
        assert_eq!(session.readout().result, "-10");
    }

    #[test]
    fn test_press_all() {
        let mut session = session(false);
        session
            .press_all(&[
                Key::Digit(8),
                Key::Operator(Operator::Div),
                Key::Digit(0),
                Key::Equals,
            ])
            .unwrap();
        assert!(session.readout().is_error);
        assert!(text(&session).is_empty());
    }

    #[test]
    fn test_run_until_quit() {
        let mut session = session(false);
        let input = "1+1=\n:quit\n3\n";
        session.run(input.as_bytes()).unwrap();
        assert_eq!(session.readout().result, "2");
        assert_eq!(text(&session), "  \n= 0\n>   2 +\n= 2\n> ");
    }

    #[test]
    fn test_render_json() {
        let mut session = session(false);
        session
            .press_all(&[Key::Digit(8), Key::Operator(Operator::Div)])
            .unwrap();
        session.render_json().unwrap();

        let value: serde_json::Value = serde_json::from_str(&text(&session)).unwrap();
        assert_eq!(value["expression"], "8 /");
        assert_eq!(value["result"], "0");
        assert_eq!(value["is_error"], false);
    }

    #[test]
    fn test_blank_line_prints_nothing() {
        let mut session = session(false);
        assert_eq!(session.handle_line("   ").unwrap(), LineOutcome::Continue);
        assert!(text(&session).is_empty());
    }
}
