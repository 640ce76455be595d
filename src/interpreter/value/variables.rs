use std::fmt;

use crate::{
    error::{ParseError, RuntimeError},
    interpreter::value::matrix::Matrix,
};

/// Number of variable slots, one per letter.
pub const VARIABLE_COUNT: usize = 26;

/// Identity of one of the 26 variable slots `A`..`Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariableId(u8);

impl VariableId {
    /// Resolves a variable name. Names are a single ASCII letter, folded to
    /// upper case.
    ///
    /// # Errors
    /// Returns `ParseError::BadVariableName` for anything else.
    ///
    /// # Example
    /// ```
    /// use calmat::interpreter::value::variables::VariableId;
    ///
    /// assert_eq!(VariableId::parse("x").unwrap().letter(), 'X');
    /// assert!(VariableId::parse("xy").is_err());
    /// ```
    pub fn parse(name: &str) -> Result<Self, ParseError> {
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => {
                Ok(Self(c.to_ascii_uppercase() as u8 - b'A'))
            },
            _ => Err(ParseError::BadVariableName { name: name.to_string() }),
        }
    }

    /// The upper-case letter naming this slot.
    #[must_use]
    pub const fn letter(self) -> char {
        (b'A' + self.0) as char
    }

    const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for VariableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The 26 matrix-valued variable slots.
///
/// Each slot owns at most one matrix; assigning a slot drops its previous
/// value.
#[derive(Debug, Clone)]
pub struct Variables {
    slots: [Option<Matrix>; VARIABLE_COUNT],
}

impl Default for Variables {
    fn default() -> Self {
        Self::new()
    }
}

impl Variables {
    /// Creates a table with every slot empty.
    #[must_use]
    pub fn new() -> Self {
        Self { slots: std::array::from_fn(|_| None) }
    }

    /// Returns the matrix held by `id`, if any.
    #[must_use]
    pub fn get(&self, id: VariableId) -> Option<&Matrix> {
        self.slots[id.index()].as_ref()
    }

    /// Returns the matrix held by `id`.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnboundVariable` if the slot is empty.
    pub fn bound(&self, id: VariableId) -> Result<&Matrix, RuntimeError> {
        self.get(id)
            .ok_or(RuntimeError::UnboundVariable { name: id.letter() })
    }

    /// Stores `value` in `id`, releasing the previous value.
    pub fn assign(&mut self, id: VariableId, value: Matrix) {
        log::debug!("{id} <- {}x{} matrix", value.rows(), value.cols());
        self.slots[id.index()] = Some(value);
    }
}
