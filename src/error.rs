use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// The operation would have placed a nul byte inside a buffer's content.
///
/// Raised by every validating constructor and guarded mutator in this crate. The failed operation
/// has no effect: the buffer or path it targeted is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("encountered an embedded nul byte")]
pub struct EmbeddedNulError;

/// An indexed read or write fell outside a buffer's current bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for buffer with {} bytes!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// Either failure of an indexed write: the value is forbidden or the index is out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum BufferError {
    EmbeddedNul(EmbeddedNulError),
    OutOfBounds(IndexOutOfBounds),
}
