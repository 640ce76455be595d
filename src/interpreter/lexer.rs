use logos::Logos;

use crate::error::ParseError;

/// Raw lexical classes recognised by the scanner.
///
/// Identifier-like runs (labels, numbers, words) extend until a delimiter
/// character: space, tab, newline, carriage return, a double quote or one
/// of ``+-&~^*=`|(),%<>``.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
enum RawToken {
    /// `\n`
    #[token("\n")]
    NewLine,
    /// Horizontal whitespace.
    #[regex(r"[ \t\r]+", logos::skip)]
    Ignored,
    /// `:name`
    #[regex(r#":[^ +\-&~^*=`|(),%<>"\t\r\n]*"#, allow_greedy = true)]
    Label,
    /// Single-character operators and separators.
    #[regex(r"[<>=+\-*`~&^|(),]")]
    Punctuation,
    /// `"text"`, possibly unterminated at end of line.
    #[regex(r#""[^"\n]*"?"#, allow_greedy = true)]
    Quote,
    /// `%0`..`%9`
    #[regex(r"%[0-9]")]
    Parameter,
    /// A run starting with a digit.
    #[regex(r#"[0-9][^ +\-&~^*=`|(),%<>"\t\r\n]*"#, allow_greedy = true)]
    Number,
    /// A run starting with a letter or `.`.
    #[regex(r#"[A-Za-z.][^ +\-&~^*=`|(),%<>"\t\r\n]*"#, allow_greedy = true)]
    Word,
}

/// Declares a keyword enum together with its case-folded lookup table.
///
/// The macro produces the enum, a `lookup` function over lower-case words
/// and a `keyword` accessor returning the spelling used in scripts.
macro_rules! keyword_table {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $word:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )*
        }

        impl $name {
            /// Looks up a lower-case word in the table.
            #[must_use]
            pub fn lookup(word: &str) -> Option<Self> {
                match word {
                    $($word => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// The keyword as written in scripts.
            #[must_use]
            pub const fn keyword(self) -> &'static str {
                match self {
                    $(Self::$variant => $word,)*
                }
            }
        }
    };
}

keyword_table! {
    /// Statement keywords recognised by the executor.
    pub enum Command {
        /// `load <file> <var> <rows> <cols>`
        Load => "load",
        /// `save <var> <file>`
        Save => "save",
        /// `print <var>`
        Print => "print",
        /// `tridiag <var> <values file> <vectors file>`
        Tridiag => "tridiag",
        /// `compocor <N> <V> <L> <coords> <abs> <rel> [<col labels> <row labels>]`
        CompoCor => "compocor",
        /// `composupp <S> <F> <L> <coords>`
        CompoLSupp => "composupp",
        /// `compocsupp <S> <F> <L> <coords>`
        CompoCSupp => "compocsupp",
        /// `goto <label>`
        Goto => "goto",
        /// `rem "comment"`
        Remark => "rem",
        /// `end`
        End => "end",
        /// `if <expr> <op> <expr>`
        If => "if",
        /// `endif`
        EndIf => "endif",
        /// `while <expr> <op> <expr>`
        While => "while",
        /// `endwhile`
        EndWhile => "endwhile",
    }
}

keyword_table! {
    /// Function names recognised inside expressions.
    pub enum Function {
        /// Chi-square distance matrix of a contingency table.
        ChiDeux => "chi_deux",
        /// Double-centering of a distance matrix.
        DistFact => "dist_fact",
        /// Inverse of a symmetric positive-definite matrix.
        InvSym => "inv_sym",
        /// Column centering and reduction.
        CentRed => "cent_red",
        /// Identity-like matrix `matint(n, m)`.
        MatInt => "matint",
        /// Zero matrix `matzero(n, m)`.
        MatZero => "matzero",
        /// Column profiles.
        CProfil => "cprofil",
    }
}

/// Single-character delimiters plus the two positional markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `=`
    Equals,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `` ` `` (transpose)
    Backtick,
    /// `~` (Boolean complement)
    Tilde,
    /// `&` (elementwise minimum)
    Ampersand,
    /// `^` (max-min product)
    Caret,
    /// `|` (elementwise maximum)
    Pipe,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`
    Comma,
    /// End of line.
    Eol,
    /// End of the program text.
    Finished,
}

impl Delimiter {
    const fn from_char(c: char) -> Option<Self> {
        Some(match c {
                 '<' => Self::Less,
                 '>' => Self::Greater,
                 '=' => Self::Equals,
                 '+' => Self::Plus,
                 '-' => Self::Minus,
                 '*' => Self::Star,
                 '`' => Self::Backtick,
                 '~' => Self::Tilde,
                 '&' => Self::Ampersand,
                 '^' => Self::Caret,
                 '|' => Self::Pipe,
                 '(' => Self::LParen,
                 ')' => Self::RParen,
                 ',' => Self::Comma,
                 _ => return None,
             })
    }
}

/// Classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Punctuation, end of line or end of text.
    Delimiter(Delimiter),
    /// An identifier that is neither a command nor a function.
    Variable,
    /// A run starting with a digit, or a numeric parameter.
    Number,
    /// A statement keyword.
    Command(Command),
    /// Fallback for stray characters and alphabetic parameters.
    String,
    /// Text between double quotes.
    Quote,
    /// A function name.
    Function(Function),
    /// A `:name` label definition.
    Label,
}

/// A position in the program text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Byte offset into the source.
    pub offset: usize,
    /// 1-based line number at `offset`.
    pub line:   usize,
}

impl Cursor {
    /// The beginning of the program.
    pub const START: Self = Self { offset: 0, line: 1 };
}

/// A classified lexeme and where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token class.
    pub kind:   TokenKind,
    /// Token text. Commands and functions are lower-cased, labels and quotes
    /// are stored without their markers, parameters hold the substituted
    /// value.
    pub lexeme: String,
    /// Position of the first character of the token.
    pub start:  Cursor,
}

impl Token {
    const fn new(kind: TokenKind, lexeme: String, start: Cursor) -> Self {
        Self { kind, lexeme, start }
    }

    /// Returns the delimiter if this is a delimiter token.
    #[must_use]
    pub const fn delimiter(&self) -> Option<Delimiter> {
        match self.kind {
            TokenKind::Delimiter(d) => Some(d),
            _ => None,
        }
    }

    /// Whether this token is the given delimiter.
    #[must_use]
    pub fn is(&self, delimiter: Delimiter) -> bool {
        self.delimiter() == Some(delimiter)
    }

    /// Whether this token ends a statement (end of line or end of text).
    #[must_use]
    pub const fn is_end_of_statement(&self) -> bool {
        matches!(self.kind, TokenKind::Delimiter(Delimiter::Eol | Delimiter::Finished))
    }

    /// Human-readable form for diagnostics.
    #[must_use]
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Delimiter(Delimiter::Eol) => "end of line".to_string(),
            TokenKind::Delimiter(Delimiter::Finished) => "end of script".to_string(),
            _ => self.lexeme.clone(),
        }
    }
}

/// Pull-based tokenizer over the program text.
///
/// The lexer owns the program text, the invocation parameters and the cursor.
/// It offers exactly one token of lookahead through [`Lexer::peek`];
/// repositioning with [`Lexer::seek`] discards the lookahead.
///
/// # Example
/// ```
/// use calmat::interpreter::lexer::{Command, Delimiter, Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("PRINT x\n", Vec::new());
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Command(Command::Print));
/// assert_eq!(lexer.peek().unwrap().kind, TokenKind::Variable);
/// assert_eq!(lexer.next_token().unwrap().lexeme, "x");
/// assert!(lexer.next_token().unwrap().is(Delimiter::Eol));
/// assert!(lexer.next_token().unwrap().is(Delimiter::Finished));
/// ```
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    params: Vec<String>,
    cursor: Cursor,
    peeked: Option<Token>,
    line:   usize,
}

impl Lexer {
    /// Creates a lexer positioned at the start of `source`.
    ///
    /// `params[i]` is substituted for `%i`.
    pub fn new(source: impl Into<String>, params: Vec<String>) -> Self {
        Self { source: source.into(),
               params,
               cursor: Cursor::START,
               peeked: None,
               line: 1 }
    }

    /// The program text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Position of the next token to be returned.
    #[must_use]
    pub fn position(&self) -> Cursor {
        self.peeked.as_ref().map_or(self.cursor, |t| t.start)
    }

    /// Line of the most recently consumed token.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Text of the 1-based line `number`, trimmed, or an empty string past
    /// the end of the program.
    #[must_use]
    pub fn line_text(&self, number: usize) -> &str {
        number.checked_sub(1)
              .and_then(|index| self.source.lines().nth(index))
              .map_or("", str::trim)
    }

    /// Moves the cursor, discarding any lookahead.
    pub fn seek(&mut self, to: Cursor) {
        self.peeked = None;
        self.cursor = to;
        self.line = to.line;
    }

    /// Moves the cursor back to the start of the program.
    pub fn reset(&mut self) {
        self.seek(Cursor::START);
    }

    /// Returns the next token without consuming it.
    ///
    /// # Errors
    /// Propagates scanning errors (invalid parameter references).
    pub fn peek(&mut self) -> Result<&Token, ParseError> {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.scan()?,
        };
        Ok(self.peeked.insert(token))
    }

    /// Consumes and returns the next token.
    ///
    /// # Errors
    /// Propagates scanning errors (invalid parameter references).
    pub fn next_token(&mut self) -> Result<Token, ParseError> {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.scan()?,
        };
        self.line = token.start.line;
        Ok(token)
    }

    /// Skips the raw text up to, but not including, the next newline and
    /// returns it.
    ///
    /// Used for comment lines, whose text is never tokenised.
    pub fn skip_line(&mut self) -> &str {
        if let Some(token) = &self.peeked {
            if token.is_end_of_statement() {
                return "";
            }
            self.peeked = None;
        }
        let start = self.cursor.offset;
        let rest = &self.source[start..];
        let len = rest.find('\n').unwrap_or(rest.len());
        self.cursor.offset += len;
        &self.source[start..start + len]
    }

    fn scan(&mut self) -> Result<Token, ParseError> {
        let (raw, span, slice, following) = {
            let rest = &self.source[self.cursor.offset..];
            let mut lexer = RawToken::lexer(rest);
            let Some(raw) = lexer.next() else {
                let end = Cursor { offset: self.source.len(),
                                   line:   self.cursor.line, };
                self.cursor = end;
                return Ok(Token::new(TokenKind::Delimiter(Delimiter::Finished), String::new(), end));
            };
            let span = lexer.span();
            let following = rest[span.end..].chars().take_while(|c| !c.is_whitespace()).collect::<String>();
            (raw, span, lexer.slice().to_string(), following)
        };

        let start = Cursor { offset: self.cursor.offset + span.start,
                             line:   self.cursor.line, };
        self.cursor.offset += span.end;

        let token = match raw {
            Ok(RawToken::NewLine) => {
                self.cursor.line += 1;
                Token::new(TokenKind::Delimiter(Delimiter::Eol), slice, start)
            },
            Ok(RawToken::Label) => Token::new(TokenKind::Label, slice[1..].to_string(), start),
            Ok(RawToken::Punctuation) => {
                let kind = slice.chars()
                                .next()
                                .and_then(Delimiter::from_char)
                                .map_or(TokenKind::String, TokenKind::Delimiter);
                Token::new(kind, slice, start)
            },
            Ok(RawToken::Quote) => {
                let inner = &slice[1..];
                let text = inner.strip_suffix('"').unwrap_or_else(|| {
                                                       log::warn!("line {}: unterminated quote", start.line);
                                                       inner
                                                   });
                Token::new(TokenKind::Quote, text.to_string(), start)
            },
            Ok(RawToken::Parameter) => self.substitute(&slice[1..], start),
            Ok(RawToken::Number) => Token::new(TokenKind::Number, slice, start),
            Ok(RawToken::Word) => classify_word(slice, start),
            Ok(RawToken::Ignored) | Err(()) => {
                if slice.starts_with('%') {
                    return Err(ParseError::InvalidParameter { found: following });
                }
                Token::new(TokenKind::String, slice, start)
            },
        };

        Ok(token)
    }

    /// Replaces `%i` by the `i`-th invocation parameter.
    ///
    /// A missing parameter yields an empty string token. A parameter whose
    /// first character is alphabetic is a string, anything else a number.
    fn substitute(&self, digit: &str, start: Cursor) -> Token {
        let index = digit.bytes().next().map_or(0, |b| usize::from(b - b'0'));
        match self.params.get(index) {
            Some(value) if !value.is_empty() => {
                let kind = if value.chars().next().is_some_and(char::is_alphabetic) {
                    TokenKind::String
                } else {
                    TokenKind::Number
                };
                Token::new(kind, value.clone(), start)
            },
            _ => Token::new(TokenKind::String, String::new(), start),
        }
    }
}

/// Classifies an identifier run as command, function or variable.
///
/// Commands and functions are matched case-insensitively and stored
/// lower-cased; variables keep their spelling so the same run can
/// serve as a file name.
fn classify_word(word: String, start: Cursor) -> Token {
    let folded = word.to_ascii_lowercase();
    if let Some(command) = Command::lookup(&folded) {
        return Token::new(TokenKind::Command(command), folded, start);
    }
    if let Some(function) = Function::lookup(&folded) {
        return Token::new(TokenKind::Function(function), folded, start);
    }
    Token::new(TokenKind::Variable, word, start)
}
