/// Failures reported at the API boundary of [`BigInt`](crate::BigInt).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("cannot parse BigInt from an empty string")]
    Empty,
    #[error("sign character is not followed by any digit")]
    MissingDigits,
    #[error("invalid digit {ch:?} at position {position}")]
    InvalidDigit { ch: char, position: usize },
    #[error("digit {digit} at position {position} is out of range for base 10")]
    DigitOutOfRange { digit: u8, position: usize },
    #[error("division by zero")]
    DivisionByZero,
}

impl Error {
    /// Whether this error rejects malformed textual or raw digit input.
    pub fn is_format(&self) -> bool {
        !matches!(self, Error::DivisionByZero)
    }
}
