use std::io::Write;

use crate::{
    error::{Error, ParseError, RuntimeError},
    interpreter::{
        executor::core::Context,
        lexer::{Command, Cursor, Delimiter, TokenKind},
    },
};

/// Bounded stack of `while` positions.
///
/// Each marker is the position of a `while` keyword; `endwhile` jumps back
/// to it so the condition is evaluated again.
#[derive(Debug, Clone)]
pub struct LoopStack {
    markers:  Vec<Cursor>,
    capacity: usize,
}

impl LoopStack {
    /// Creates an empty stack holding at most `capacity` markers.
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self { markers: Vec::new(),
               capacity }
    }

    /// Pushes a marker.
    ///
    /// # Errors
    /// Returns `RuntimeError::LoopStackOverflow` when the stack is full.
    pub fn push(&mut self, marker: Cursor) -> Result<(), RuntimeError> {
        if self.markers.len() >= self.capacity {
            return Err(RuntimeError::LoopStackOverflow { max: self.capacity });
        }
        self.markers.push(marker);
        Ok(())
    }

    /// Pops the innermost marker.
    ///
    /// # Errors
    /// Returns `RuntimeError::EndwhileWithoutWhile` when the stack is empty.
    pub fn pop(&mut self) -> Result<Cursor, RuntimeError> {
        self.markers.pop().ok_or(RuntimeError::EndwhileWithoutWhile)
    }

    /// Number of open loops.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.markers.len()
    }
}

impl<W: Write> Context<W> {
    /// `goto <label>`: continues after the label definition.
    pub(crate) fn exec_goto(&mut self) -> Result<(), Error> {
        let token = self.lexer.next_token()?;
        if token.is_end_of_statement() {
            return Err(ParseError::MissingOperand { command:  Command::Goto.keyword(),
                                                    expected: "label", }.into());
        }
        let target = self.labels
                         .find(&token.lexeme)
                         .ok_or_else(|| RuntimeError::UnknownLabel { name: token.lexeme.clone() })?
                         .target;
        log::debug!("line {}: goto {} (line {})", token.start.line, token.lexeme, target.line);
        self.lexer.seek(target);
        Ok(())
    }

    /// `if <condition>`: skips to the matching `endif` when the condition
    /// is false.
    pub(crate) fn exec_if(&mut self) -> Result<(), Error> {
        if !self.parse_condition()? {
            self.skip_block(Command::If, Command::EndIf)?;
        }
        Ok(())
    }

    /// `while <condition>`: pushes the position of the `while` keyword, then
    /// either enters the body or skips past the matching `endwhile`.
    pub(crate) fn exec_while(&mut self, start: Cursor) -> Result<(), Error> {
        self.loops.push(start)?;
        log::trace!("line {}: while, {} open loop(s)", start.line, self.loops.depth());
        if !self.parse_condition()? {
            self.loops.pop()?;
            self.skip_block(Command::While, Command::EndWhile)?;
        }
        Ok(())
    }

    /// `endwhile`: jumps back to the innermost `while`.
    pub(crate) fn exec_endwhile(&mut self) -> Result<(), Error> {
        let marker = self.loops.pop()?;
        log::debug!("line {}: back to while at line {}", self.lexer.line(), marker.line);
        self.lexer.seek(marker);
        Ok(())
    }

    /// Skips tokens up to and including the `close` keyword matching an
    /// `open` that has just been handled. Nested blocks of the same kind
    /// are skipped whole and comment lines are not tokenised.
    fn skip_block(&mut self, open: Command, close: Command) -> Result<(), Error> {
        let mut depth = 0usize;
        loop {
            let token = self.lexer.next_token()?;
            match token.kind {
                TokenKind::Delimiter(Delimiter::Finished) => {
                    let error = if close == Command::EndIf {
                        RuntimeError::IfWithoutEndif
                    } else {
                        RuntimeError::WhileWithoutEndwhile
                    };
                    return Err(error.into());
                },
                TokenKind::Command(Command::Remark) => {
                    self.lexer.skip_line();
                },
                TokenKind::Command(command) if command == open => depth += 1,
                TokenKind::Command(command) if command == close => {
                    if depth == 0 {
                        return Ok(());
                    }
                    depth -= 1;
                },
                _ => {},
            }
        }
    }
}
