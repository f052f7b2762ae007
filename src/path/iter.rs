use std::iter::FusedIterator;

/// An iterator over the components of a [`CanonicalPath`](crate::path::CanonicalPath), in order,
/// excluding the root marker.
///
/// The root path `/` has no components; the current-directory path `.` has the single component
/// `.`; every other component is non-empty and not `.`.
pub struct Components<'a> {
    pub(crate) path: &'a [u8],
    pub(crate) head: usize,
}

impl<'a> Iterator for Components<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        // Canonical form has at most one separator here.
        while self.path.get(self.head) == Some(&b'/') {
            self.head += 1;
        }
        if self.head >= self.path.len() {
            None?
        }
        let mut tail = self.head + 1;

        while let Some(ch) = self.path.get(tail) && *ch != b'/' {
            tail += 1;
        }

        let res = &self.path[self.head..tail];
        self.head = tail;

        Some(res)
    }
}

impl FusedIterator for Components<'_> {}
