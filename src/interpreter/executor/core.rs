use std::io::Write;

use crate::{
    config::Limits,
    error::{Error, ParseError, RuntimeError, ScriptError},
    interpreter::{
        executor::control_flow::LoopStack,
        labels::LabelIndex,
        lexer::{Command, Delimiter, Lexer, Token, TokenKind},
        value::{
            matrix::Matrix,
            variables::{VariableId, Variables},
        },
    },
};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The end of the program text was reached.
    Finished,
    /// An `end` command stopped the run.
    Ended {
        /// Line of the `end` command.
        line: usize,
    },
}

/// Stores the complete interpreter state.
///
/// The context owns the program text and its cursor (through the lexer),
/// the 26 variable slots, the label index, the loop-marker stack, the
/// limits and the sink that receives `print`, `rem` and console output.
///
/// ## Usage
///
/// A context is created for one program and consumed by [`Context::run`].
/// The variables and the output stay readable afterwards, which is how the
/// tests inspect a run.
///
/// # Example
/// ```
/// use calmat::interpreter::executor::core::{Context, Outcome};
///
/// let mut context = Context::new("X = matint(2, 2)\nY = X + X\n", Vec::new(), Vec::new());
/// assert_eq!(context.run().unwrap(), Outcome::Finished);
/// assert_eq!(context.variable('y').unwrap().data(), &[2.0, 0.0, 0.0, 2.0]);
/// ```
pub struct Context<W: Write> {
    pub(crate) lexer:     Lexer,
    pub(crate) variables: Variables,
    pub(crate) labels:    LabelIndex,
    pub(crate) loops:     LoopStack,
    pub(crate) limits:    Limits,
    pub(crate) out:       W,
}

impl<W: Write> Context<W> {
    /// Creates a context for `source` with default limits.
    ///
    /// # Parameters
    /// - `source`: The program text.
    /// - `params`: Invocation parameters; `params[i]` replaces `%i`.
    /// - `out`: Sink for `print`, `rem` and console output.
    pub fn new(source: impl Into<String>, params: Vec<String>, out: W) -> Self {
        let limits = Limits::default();
        Self { lexer: Lexer::new(source, params),
               variables: Variables::new(),
               labels: LabelIndex::default(),
               loops: LoopStack::new(limits.max_loop_depth),
               limits,
               out }
    }

    /// Replaces the limits of the run.
    #[must_use]
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.loops = LoopStack::new(limits.max_loop_depth);
        self.limits = limits;
        self
    }

    /// Runs the program from the start.
    ///
    /// The label index is built first, then statements are executed one at
    /// a time until the end of the text, an `end` command, or the first
    /// error. Errors are never recovered: the run stops and the error is
    /// returned with the line it happened on.
    ///
    /// # Errors
    /// Returns a [`ScriptError`] describing the first failure.
    pub fn run(&mut self) -> Result<Outcome, ScriptError> {
        match LabelIndex::scan(&mut self.lexer, self.limits.max_labels) {
            Ok(labels) => self.labels = labels,
            Err(error) => return Err(self.diagnose(error)),
        }
        self.loops = LoopStack::new(self.limits.max_loop_depth);

        let outcome = loop {
            match self.step() {
                Ok(Some(outcome)) => break outcome,
                Ok(None) => {},
                Err(error) => return Err(self.diagnose(error)),
            }
        };

        if let Err(e) = self.out.flush() {
            return Err(self.diagnose(RuntimeError::io("output", e).into()));
        }
        match outcome {
            Outcome::Finished => log::info!("end of script"),
            Outcome::Ended { line } => log::info!("end of script at line {line}"),
        }
        Ok(outcome)
    }

    /// Returns the matrix held by the variable `name`, if any.
    ///
    /// `name` is case-insensitive.
    #[must_use]
    pub fn variable(&self, name: char) -> Option<&Matrix> {
        let mut buffer = [0; 4];
        VariableId::parse(name.encode_utf8(&mut buffer)).ok()
                                                        .and_then(|id| self.variables.get(id))
    }

    /// The output sink.
    #[must_use]
    pub const fn output(&self) -> &W {
        &self.out
    }

    /// Consumes the context and returns the output sink.
    #[must_use]
    pub fn into_output(self) -> W {
        self.out
    }

    /// Executes one statement.
    ///
    /// Returns `Some` when the run is over.
    fn step(&mut self) -> Result<Option<Outcome>, Error> {
        let token = self.lexer.next_token()?;
        match token.kind {
            TokenKind::Variable => self.exec_assignment(&token)?,
            TokenKind::Command(command) => return self.exec_command(command, &token),
            TokenKind::Delimiter(Delimiter::Finished) => return Ok(Some(Outcome::Finished)),
            TokenKind::Delimiter(Delimiter::Eol) | TokenKind::Label => {},
            _ => return Err(ParseError::UnexpectedToken { token: token.describe() }.into()),
        }
        Ok(None)
    }

    /// Dispatches a command whose keyword has been consumed.
    fn exec_command(&mut self, command: Command, token: &Token) -> Result<Option<Outcome>, Error> {
        match command {
            Command::Load => self.exec_load()?,
            Command::Save => self.exec_save()?,
            Command::Print => self.exec_print()?,
            Command::Remark => self.exec_remark()?,
            Command::Tridiag => self.exec_tridiag()?,
            Command::CompoCor => self.exec_compocor()?,
            Command::CompoLSupp => self.exec_composupp()?,
            Command::CompoCSupp => self.exec_compocsupp()?,
            Command::Goto => self.exec_goto()?,
            Command::If => self.exec_if()?,
            Command::EndIf => {},
            Command::While => self.exec_while(token.start)?,
            Command::EndWhile => self.exec_endwhile()?,
            Command::End => return Ok(Some(Outcome::Ended { line: token.start.line })),
        }
        Ok(None)
    }

    /// `<var> = <expr>`. The variable is only replaced once the whole
    /// statement has been evaluated.
    fn exec_assignment(&mut self, target: &Token) -> Result<(), Error> {
        let id = VariableId::parse(&target.lexeme)?;
        self.expect_delimiter(Delimiter::Equals, '=')?;
        let value = self.parse_expression()?;
        self.expect_end_of_statement()?;
        self.variables.assign(id, value);
        Ok(())
    }

    /// Fails unless the next token ends the statement. The token is left
    /// unconsumed.
    pub(crate) fn expect_end_of_statement(&mut self) -> Result<(), Error> {
        let token = self.lexer.peek()?;
        if token.is_end_of_statement() {
            Ok(())
        } else {
            Err(ParseError::UnexpectedTrailingTokens { token: token.describe() }.into())
        }
    }

    /// Attaches the current line and its text to an error.
    fn diagnose(&self, error: Error) -> ScriptError {
        let line = self.lexer.line();
        ScriptError { line,
                      excerpt: self.lexer.line_text(line).to_string(),
                      error }
    }
}
