use thiserror::Error;

/// Batches which must describe the same exams have different lengths.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("batch size mismatch: `{argument}` has {found} entries, but the batch has {expected} exams")]
pub struct ShapeMismatch {
    pub argument: &'static str,
    pub expected: usize,
    pub found: usize,
}

impl ShapeMismatch {
    /// `Ok` if `found == expected`, otherwise an error blaming `argument`.
    pub fn check(argument: &'static str, expected: usize, found: usize) -> Result<(), Self> {
        if found == expected { Ok(()) }
        else                 { Err(Self { argument, expected, found }) }
    }
}
