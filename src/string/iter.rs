use std::iter::FusedIterator;
use std::slice;

use crate::string::NulFreeString;

/// A by-value iterator over the content bytes of a [`NulFreeString`], excluding the terminator.
pub struct Bytes<'a> {
    pub(crate) inner: slice::Iter<'a, u8>,
}

impl Iterator for Bytes<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Bytes<'_> {
    fn next_back(&mut self) -> Option<u8> {
        self.inner.next_back().copied()
    }
}

impl ExactSizeIterator for Bytes<'_> {}

impl FusedIterator for Bytes<'_> {}

impl<'a> IntoIterator for &'a NulFreeString {
    type Item = u8;
    type IntoIter = Bytes<'a>;

    fn into_iter(self) -> Bytes<'a> {
        self.iter()
    }
}
