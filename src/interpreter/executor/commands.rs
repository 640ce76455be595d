use std::io::Write;

use crate::{
    error::{Error, ParseError, RuntimeError},
    interpreter::{
        executor::core::Context,
        lexer::{Command, TokenKind},
        value::variables::VariableId,
    },
    io::{self, CONSOLE, matrix_file::load_matrix},
    util::num::{checked_elements, parse_dimension},
};

impl<W: Write> Context<W> {
    /// `load <file> <var> <rows> <cols>`
    ///
    /// The variable is only bound once the whole file has been read.
    pub(crate) fn exec_load(&mut self) -> Result<(), Error> {
        let path = self.path_operand(Command::Load)?;
        let id = self.variable_operand(Command::Load)?;
        let rows = self.dimension_operand(Command::Load)?;
        let cols = self.dimension_operand(Command::Load)?;
        checked_elements(rows, cols, self.limits.max_elements)?;
        let matrix = load_matrix(&path, rows, cols)?;
        self.variables.assign(id, matrix);
        Ok(())
    }

    /// `save <var> <file>`
    pub(crate) fn exec_save(&mut self) -> Result<(), Error> {
        let id = self.variable_operand(Command::Save)?;
        let path = self.path_operand(Command::Save)?;
        let text = self.variables.bound(id)?.to_string();
        self.emit(&path, &text)
    }

    /// `print <var>`: writes every element with its indices.
    pub(crate) fn exec_print(&mut self) -> Result<(), Error> {
        let id = self.variable_operand(Command::Print)?;
        let matrix = self.variables.bound(id)?;
        let mut text = format!("matrix {id}[{}, {}]\n", matrix.rows(), matrix.cols());
        for (i, row) in matrix.rows_iter().enumerate() {
            text.push_str(&format!("row {i}\n"));
            for (j, x) in row.iter().enumerate() {
                text.push_str(&format!("element({i}, {j}) : {x:.6}\n"));
            }
            text.push('\n');
        }
        self.emit(CONSOLE, &text)
    }

    /// `rem "comment"`: echoes the quoted text, ignores the rest of the
    /// line.
    pub(crate) fn exec_remark(&mut self) -> Result<(), Error> {
        let line = self.lexer.skip_line().trim();
        if let Some(quoted) = line.strip_prefix('"') {
            let comment = quoted.split('"').next().unwrap_or_default();
            writeln!(self.out, "{comment}").map_err(|e| RuntimeError::io(CONSOLE, e))?;
        }
        Ok(())
    }

    /// Writes `text` to the file `path`, or to the output sink for `con:`.
    pub(crate) fn emit(&mut self, path: &str, text: &str) -> Result<(), Error> {
        if io::is_console(path) {
            self.out
                .write_all(text.as_bytes())
                .map_err(|e| RuntimeError::io(CONSOLE, e))?;
        } else {
            io::write_text(path, text)?;
        }
        Ok(())
    }

    /// Reads a variable name operand.
    pub(crate) fn variable_operand(&mut self, command: Command) -> Result<VariableId, Error> {
        let token = self.lexer.next_token()?;
        if token.is_end_of_statement() {
            return Err(ParseError::MissingOperand { command:  command.keyword(),
                                                    expected: "variable", }.into());
        }
        Ok(VariableId::parse(&token.lexeme)?)
    }

    /// Reads a file name operand: a quoted string or any bare word.
    pub(crate) fn path_operand(&mut self, command: Command) -> Result<String, Error> {
        let token = self.lexer.next_token()?;
        match token.kind {
            TokenKind::Delimiter(_) | TokenKind::Label => Err(ParseError::MissingOperand { command:  command.keyword(),
                                                                                           expected: "file name", }.into()),
            _ if token.lexeme.is_empty() => Err(ParseError::MissingOperand { command:  command.keyword(),
                                                                             expected: "file name", }.into()),
            _ => Ok(token.lexeme),
        }
    }

    /// Reads an optional file name operand, `None` at the end of the
    /// statement.
    pub(crate) fn optional_path_operand(&mut self, command: Command) -> Result<Option<String>, Error> {
        if self.lexer.peek()?.is_end_of_statement() {
            return Ok(None);
        }
        self.path_operand(command).map(Some)
    }

    /// Reads a dimension operand: a strictly positive integer.
    fn dimension_operand(&mut self, command: Command) -> Result<usize, Error> {
        let token = self.lexer.next_token()?;
        match token.kind {
            TokenKind::Number => Ok(parse_dimension(&token.lexeme)?),
            _ if token.is_end_of_statement() => Err(ParseError::MissingOperand { command:  command.keyword(),
                                                                                 expected: "dimension", }.into()),
            _ => Err(ParseError::InvalidDimension { literal: token.describe() }.into()),
        }
    }
}
