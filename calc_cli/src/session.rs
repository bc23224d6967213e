//! # Interactive Session
//!
//! The menu loop: show the menu, read a selection, collect dimensions,
//! print results, repeat until the user exits or input runs out.
//!
//! The session is generic over its input and output so it can be driven
//! from in-memory buffers as easily as from a terminal.

use std::io::{self, BufRead, Write};

use calc_core::report::{surface_area_line, volume_line};
use calc_core::{parse_dimension, CalcResult, Dimensions, MenuChoice, ShapeKind, ShapeResult};

use crate::menu::{dimension_prompt, render_menu, CHOICE_PROMPT, GOODBYE, INVALID_CHOICE};

/// Where the loop stands between iterations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

pub struct Session<R, W> {
    input: R,
    output: W,
    state: SessionState,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Session {
            input,
            output,
            state: SessionState::Running,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Run menu iterations until the session terminates.
    pub fn run(&mut self) -> io::Result<()> {
        while self.state == SessionState::Running {
            self.step()?;
        }
        Ok(())
    }

    /// One pass through the menu.
    pub fn step(&mut self) -> io::Result<SessionState> {
        if self.state == SessionState::Terminated {
            return Ok(self.state);
        }

        render_menu(&mut self.output)?;
        let Some(selection) = self.prompt(CHOICE_PROMPT)? else {
            return Ok(self.end_of_input());
        };

        match MenuChoice::parse(&selection) {
            Some(MenuChoice::Shape(kind)) => {
                log::debug!("selected {}", kind.name());
                self.calculate(kind)?;
            }
            Some(MenuChoice::Exit) => {
                writeln!(self.output, "{}", GOODBYE)?;
                self.state = SessionState::Terminated;
            }
            None => {
                log::debug!("unrecognized menu selection {:?}", selection);
                writeln!(self.output, "{}", INVALID_CHOICE)?;
            }
        }
        self.output.flush()?;
        Ok(self.state)
    }

    /// Consume the session and hand back its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompt for each dimension of `kind`, then print its results.
    ///
    /// The first value that fails to parse abandons the attempt; later
    /// dimensions are not asked for.
    fn calculate(&mut self, kind: ShapeKind) -> io::Result<()> {
        let mut values = Vec::with_capacity(kind.arity());
        for spec in kind.dimensions() {
            let Some(text) = self.prompt(&dimension_prompt(spec))? else {
                self.end_of_input();
                return Ok(());
            };
            match parse_dimension(spec.field, &text) {
                Ok(value) => values.push(value),
                Err(e) => {
                    log::warn!("rejected {} input: {}", kind.name(), e);
                    writeln!(self.output)?;
                    writeln!(self.output, "{}", kind.invalid_input_message())?;
                    return Ok(());
                }
            }
        }

        match compute(kind, values) {
            Ok((dims, result)) => {
                if let Ok(json) = serde_json::to_string(&dims) {
                    log::debug!("evaluating {}", json);
                }
                writeln!(self.output)?;
                writeln!(self.output, "{}", surface_area_line(kind, &result))?;
                writeln!(self.output, "{}", volume_line(kind, &result))?;
            }
            // Arity is fixed by the prompt loop above, so this only fires on a bug
            Err(e) => log::error!("{} evaluation failed: {}", kind.name(), e),
        }
        Ok(())
    }

    /// Print `text` without a newline, then read one line.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Read one line with its line terminator removed. `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn end_of_input(&mut self) -> SessionState {
        log::debug!("input closed, ending session");
        self.state = SessionState::Terminated;
        self.state
    }
}

fn compute(kind: ShapeKind, values: Vec<f64>) -> CalcResult<(Dimensions, ShapeResult)> {
    let dims = Dimensions::new(kind, values)?;
    let result = dims.evaluate()?;
    Ok((dims, result))
}
