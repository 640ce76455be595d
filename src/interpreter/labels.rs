use crate::{
    error::{Error, RuntimeError},
    interpreter::lexer::{Command, Cursor, Delimiter, Lexer, TokenKind},
};

/// A label definition: its name and the position just after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    /// Name without the leading `:`.
    pub name:   String,
    /// Where execution resumes after a `goto`.
    pub target: Cursor,
}

/// Index of every label in the program, built once before execution.
#[derive(Debug, Clone, Default)]
pub struct LabelIndex {
    labels: Vec<Label>,
}

impl LabelIndex {
    /// Lexes the whole program once and records every label definition.
    ///
    /// Comment lines are skipped without being tokenised. The lexer is reset
    /// to the start of the program afterwards. When the same name is
    /// defined twice, the first definition wins.
    ///
    /// # Errors
    /// Returns `RuntimeError::TooManyLabels` when more than `max_labels`
    /// labels are defined, or any lexing error met on the way.
    ///
    /// # Example
    /// ```
    /// use calmat::interpreter::{labels::LabelIndex, lexer::Lexer};
    ///
    /// let mut lexer = Lexer::new("x = matint(1, 1)\n:Top\ngoto top\n", Vec::new());
    /// let labels = LabelIndex::scan(&mut lexer, 32).unwrap();
    /// assert_eq!(labels.len(), 1);
    /// assert_eq!(labels.find("TOP").unwrap().target.line, 2);
    /// assert!(labels.find("bottom").is_none());
    /// ```
    pub fn scan(lexer: &mut Lexer, max_labels: usize) -> Result<Self, Error> {
        let mut index = Self::default();
        lexer.reset();

        loop {
            let token = lexer.next_token()?;
            match token.kind {
                TokenKind::Delimiter(Delimiter::Finished) => break,
                TokenKind::Command(Command::Remark) => {
                    lexer.skip_line();
                },
                TokenKind::Label => {
                    if index.find(&token.lexeme).is_some() {
                        log::warn!("line {}: label '{}' is defined more than once", token.start.line, token.lexeme);
                        continue;
                    }
                    if index.labels.len() >= max_labels {
                        return Err(RuntimeError::TooManyLabels { max: max_labels }.into());
                    }
                    index.labels.push(Label { name:   token.lexeme,
                                              target: lexer.position(), });
                },
                _ => {},
            }
        }

        if log::log_enabled!(log::Level::Trace) {
            for (number, text) in lexer.source().lines().enumerate() {
                log::trace!("{} : {text}", number + 1);
            }
        }
        log::debug!("{} label(s) indexed", index.labels.len());

        lexer.reset();
        Ok(index)
    }

    /// Looks up a label by name, ignoring ASCII case.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Label> {
        self.labels
            .iter()
            .find(|label| label.name.eq_ignore_ascii_case(name))
    }

    /// Number of labels recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the program defines no labels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
