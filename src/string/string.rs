use std::ffi::CStr;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Index;
use std::str::FromStr;

use crate::error::{BufferError, EmbeddedNulError, IndexOutOfBounds};
use crate::string::Bytes;

/// An owned, mutable byte string guaranteed to contain no embedded nul byte.
///
/// The guarantee holds at every observable state: each constructor and each mutator rejects a nul
/// before it can land in the content, so any holder can pass the string to an OS API via
/// [`as_c_str`](NulFreeString::as_c_str) or [`as_ptr`](NulFreeString::as_ptr) without scanning it
/// again at the point of use.
///
/// Internally the content is followed by a single nul sentinel, making the terminated borrow free.
/// The sentinel is representation, not content: [`len`](NulFreeString::len), equality, iteration
/// and indexing never observe it.
///
/// # Examples
/// ```
/// # use nul_path::string::NulFreeString;
/// let mut s = NulFreeString::new("hello")?;
/// s.push_bytes(" world")?;
/// assert_eq!(s.as_bytes(), b"hello world");
/// assert!(s.push(b'\0').is_err());
/// # Ok::<(), nul_path::EmbeddedNulError>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NulFreeString {
    // Content plus exactly one trailing nul.
    pub(crate) inner: Vec<u8>,
}

impl NulFreeString {
    /// Creates a NulFreeString by validating `raw`, copying it verbatim.
    ///
    /// Fails iff `raw` contains a nul byte anywhere.
    ///
    /// # Examples
    /// ```
    /// # use nul_path::string::NulFreeString;
    /// assert!(NulFreeString::new("abc").is_ok());
    /// assert!(NulFreeString::new("ab\0c").is_err());
    /// ```
    pub fn new<B: AsRef<[u8]>>(raw: B) -> Result<NulFreeString, EmbeddedNulError> {
        let raw = raw.as_ref();
        if raw.contains(&b'\0') {
            return Err(EmbeddedNulError);
        }

        let mut inner = Vec::with_capacity(raw.len() + 1);
        inner.extend_from_slice(raw);
        inner.push(b'\0');

        Ok(NulFreeString { inner })
    }

    /// Creates a NulFreeString by removing every occurrence of any byte in `strip` from `raw`.
    /// Nul bytes are always removed, whether or not `strip` names them, so this never fails.
    ///
    /// # Examples
    /// ```
    /// # use nul_path::string::NulFreeString;
    /// let s = NulFreeString::sanitized("NUL\0here", &[]);
    /// assert_eq!(s.as_bytes(), b"NULhere");
    ///
    /// let s = NulFreeString::sanitized("a-b-c", b"-");
    /// assert_eq!(s.as_bytes(), b"abc");
    /// ```
    pub fn sanitized<B: AsRef<[u8]>>(raw: B, strip: &[u8]) -> NulFreeString {
        let raw = raw.as_ref();

        let mut inner = Vec::with_capacity(raw.len() + 1);
        inner.extend(
            raw.iter()
                .filter(|ch| **ch != b'\0' && !strip.contains(ch))
                .copied()
        );
        inner.push(b'\0');

        NulFreeString { inner }
    }

    /// Wraps a vec which must already hold nul-free content followed by exactly one trailing nul.
    pub(crate) fn from_vec_with_nul_unchecked(inner: Vec<u8>) -> NulFreeString {
        debug_assert!(inner.last() == Some(&b'\0'));
        debug_assert!(!inner[..inner.len() - 1].contains(&b'\0'));

        NulFreeString { inner }
    }

    pub(crate) fn inner_mut(&mut self) -> &mut Vec<u8> {
        &mut self.inner
    }

    /// Returns the length of the content, excluding the terminator.
    pub fn len(&self) -> usize {
        self.inner.len() - 1
    }

    /// Returns true if the content is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the content without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.inner[..self.inner.len() - 1]
    }

    /// Returns the content including the trailing terminator.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.inner
    }

    /// Returns a pointer to the start of the terminated content, suitable for passing to an OS
    /// API for the duration of the borrow.
    pub fn as_ptr(&self) -> *const u8 {
        self.inner.as_ptr()
    }

    /// Borrows the content as a terminated C string.
    ///
    /// This is the bridge to OS-facing collaborators: the view is valid only as long as the
    /// borrow, and no terminated copy is made — the terminator already lives at the end of the
    /// string's single allocation.
    ///
    /// # Examples
    /// ```
    /// # use nul_path::string::NulFreeString;
    /// let s = NulFreeString::new("abc")?;
    /// assert_eq!(s.as_c_str().to_bytes(), b"abc");
    /// # Ok::<(), nul_path::EmbeddedNulError>(())
    /// ```
    pub fn as_c_str(&self) -> &CStr {
        // SAFETY: inner always ends with exactly one nul and the content before it contains none,
        // upheld by every constructor and mutator.
        unsafe { CStr::from_bytes_with_nul_unchecked(&self.inner) }
    }

    /// Returns the byte at `index`, or [`IndexOutOfBounds`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<u8, IndexOutOfBounds> {
        if index >= self.len() {
            return Err(IndexOutOfBounds { index, len: self.len() });
        }

        Ok(self.inner[index])
    }

    /// Returns the byte `offset` positions from the end, where offset 0 is the last byte. This is
    /// the from-end convenience view of [`get`](NulFreeString::get), not a distinct operation.
    ///
    /// # Examples
    /// ```
    /// # use nul_path::string::NulFreeString;
    /// let s = NulFreeString::new("abc")?;
    /// assert_eq!(s.get_back(0), Ok(b'c'));
    /// assert_eq!(s.get_back(2), Ok(b'a'));
    /// assert!(s.get_back(3).is_err());
    /// # Ok::<(), nul_path::EmbeddedNulError>(())
    /// ```
    pub fn get_back(&self, offset: usize) -> Result<u8, IndexOutOfBounds> {
        if offset >= self.len() {
            return Err(IndexOutOfBounds { index: offset, len: self.len() });
        }

        Ok(self.inner[self.len() - 1 - offset])
    }

    /// Sets the byte at `index` to `value`.
    ///
    /// Fails with [`BufferError::EmbeddedNul`] if `value` is a nul byte and with
    /// [`BufferError::OutOfBounds`] for an invalid index; either way the string is unchanged.
    ///
    /// # Examples
    /// ```
    /// # use nul_path::string::NulFreeString;
    /// let mut s = NulFreeString::new("abc")?;
    /// s.set(1, b'x')?;
    /// assert_eq!(s.as_bytes(), b"axc");
    /// assert!(s.set(1, b'\0').is_err());
    /// assert_eq!(s.as_bytes(), b"axc");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn set(&mut self, index: usize, value: u8) -> Result<(), BufferError> {
        if value == b'\0' {
            Err(EmbeddedNulError)?
        }
        if index >= self.len() {
            Err(IndexOutOfBounds { index, len: self.len() })?
        }

        self.inner[index] = value;
        Ok(())
    }

    /// Appends a single byte, failing if it is a nul.
    pub fn push(&mut self, value: u8) -> Result<(), EmbeddedNulError> {
        if value == b'\0' {
            return Err(EmbeddedNulError);
        }

        // Overwrite the sentinel, then restore it.
        let end = self.inner.len() - 1;
        self.inner[end] = value;
        self.inner.push(b'\0');
        Ok(())
    }

    /// Appends a raw byte string, validating the whole argument first.
    ///
    /// Fails if `raw` contains a nul byte anywhere, in which case the string is left byte-for-byte
    /// as it was — no partial append is observable.
    ///
    /// # Examples
    /// ```
    /// # use nul_path::string::NulFreeString;
    /// let mut s = NulFreeString::new("ab")?;
    /// assert!(s.push_bytes("cd\0ef").is_err());
    /// assert_eq!(s.as_bytes(), b"ab");
    /// # Ok::<(), nul_path::EmbeddedNulError>(())
    /// ```
    pub fn push_bytes<B: AsRef<[u8]>>(&mut self, raw: B) -> Result<(), EmbeddedNulError> {
        let raw = raw.as_ref();
        if raw.contains(&b'\0') {
            return Err(EmbeddedNulError);
        }

        self.inner.pop();
        self.inner.extend_from_slice(raw);
        self.inner.push(b'\0');
        Ok(())
    }

    /// Appends another NulFreeString. Never fails: the argument's content is already validated.
    pub fn append(&mut self, other: &NulFreeString) {
        self.inner.pop();
        // other's sentinel becomes ours.
        self.inner.extend_from_slice(other.as_bytes_with_nul());
    }

    /// Returns an iterator over the content bytes.
    pub fn iter(&self) -> Bytes<'_> {
        Bytes {
            inner: self.as_bytes().iter(),
        }
    }
}

impl Default for NulFreeString {
    fn default() -> Self {
        NulFreeString {
            inner: vec![b'\0'],
        }
    }
}

impl Index<usize> for NulFreeString {
    type Output = u8;

    /// # Panics
    /// Panics if the index is out of bounds. Use [`get`](NulFreeString::get) for the checked form.
    fn index(&self, index: usize) -> &u8 {
        &self.as_bytes()[index]
    }
}

impl AsRef<[u8]> for NulFreeString {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl FromStr for NulFreeString {
    type Err = EmbeddedNulError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NulFreeString::new(s)
    }
}

impl From<NulFreeString> for Vec<u8> {
    /// Unwraps the content, without the terminator.
    fn from(mut value: NulFreeString) -> Vec<u8> {
        value.inner.pop();
        value.inner
    }
}

impl Debug for NulFreeString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "NulFreeString({:?})", String::from_utf8_lossy(self.as_bytes()))
    }
}

impl Display for NulFreeString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.as_bytes()))
    }
}
