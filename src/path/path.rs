use std::ffi::CStr;
use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use crate::error::EmbeddedNulError;
use crate::path::Components;
use crate::path::normalize::normalize;
use crate::string::NulFreeString;

/// A path held in canonical lexical POSIX form, stored in a [`NulFreeString`].
///
/// Canonical form means: no consecutive separators, no trailing separator except for the root `/`
/// itself, no `.` component except the sole-component path `.` denoting the current directory,
/// and `..` components preserved verbatim. Components merely *beginning* with dots (`.config`,
/// `..abc`, `...`) are ordinary content and are never collapsed.
///
/// Normalization is purely lexical — it never consults the filesystem, so it never resolves `..`
/// against the preceding component (a symlink could make that wrong) and never fails. The only
/// failure surface is an embedded nul in raw input, inherited from [`NulFreeString`].
///
/// # Examples
/// ```
/// # use nul_path::path::CanonicalPath;
/// assert_eq!(CanonicalPath::new("abc/../def/")?.as_bytes(), b"abc/../def");
/// assert_eq!(CanonicalPath::new("./a/./b")?.as_bytes(), b"a/b");
/// assert_eq!(CanonicalPath::new("")?.as_bytes(), b".");
/// assert_eq!(CanonicalPath::new("/////")?.as_bytes(), b"/");
/// # Ok::<(), nul_path::EmbeddedNulError>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CanonicalPath {
    inner: NulFreeString,
}

impl CanonicalPath {
    /// Creates a CanonicalPath by validating `raw` for embedded nuls and normalizing it.
    ///
    /// Normalization itself is total; the only error is [`EmbeddedNulError`], reported distinctly
    /// because path syntax is never the cause of a nul violation.
    pub fn new<B: AsRef<[u8]>>(raw: B) -> Result<CanonicalPath, EmbeddedNulError> {
        let raw = raw.as_ref();
        if raw.contains(&b'\0') {
            return Err(EmbeddedNulError);
        }

        Ok(CanonicalPath {
            inner: NulFreeString::from_vec_with_nul_unchecked(normalize(raw)),
        })
    }

    /// The root path `/`.
    pub fn root() -> CanonicalPath {
        CanonicalPath {
            inner: NulFreeString::from_vec_with_nul_unchecked(vec![b'/', b'\0']),
        }
    }

    /// The current-directory path `.`, the canonical form of the empty path.
    pub fn current_dir() -> CanonicalPath {
        CanonicalPath {
            inner: NulFreeString::from_vec_with_nul_unchecked(vec![b'.', b'\0']),
        }
    }

    /// Appends raw path fragments in order, re-normalizing under the same lexical semantics.
    ///
    /// Each fragment may itself contain separators; joining `["a/b"]` and `["a", "b"]` are
    /// equivalent. A joined `..` is kept verbatim like any other component, with one exception:
    /// the root has no parent in the lexical model, so a `..` appended while the path is exactly
    /// `/` is absorbed rather than kept.
    ///
    /// All fragments are validated before any mutation, so a nul in any fragment leaves the path
    /// unchanged.
    ///
    /// # Examples
    /// ```
    /// # use nul_path::path::CanonicalPath;
    /// let mut path = CanonicalPath::root();
    /// path.join(["..", ".."])?;
    /// assert_eq!(path.as_bytes(), b"/");
    ///
    /// let mut path = CanonicalPath::new("a")?;
    /// path.join(["..", "b//c/"])?;
    /// assert_eq!(path.as_bytes(), b"a/../b/c");
    /// # Ok::<(), nul_path::EmbeddedNulError>(())
    /// ```
    pub fn join<I>(&mut self, fragments: I) -> Result<(), EmbeddedNulError>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let mut pending = Vec::new();
        for fragment in fragments {
            let fragment = fragment.as_ref();
            if fragment.contains(&b'\0') {
                return Err(EmbeddedNulError);
            }
            pending.push(b'/');
            pending.extend_from_slice(fragment);
        }

        for component in pending.split(|ch| *ch == b'/') {
            match component {
                b"" | b"." => (),
                b".." if self.inner.as_bytes() == b"/" => (),
                component => self.push_component(component),
            }
        }
        Ok(())
    }

    /// Appends one already-vetted, non-empty, non-`.` component.
    fn push_component(&mut self, component: &[u8]) {
        let at_root = self.inner.as_bytes() == b"/";
        let no_components = self.inner.as_bytes() == b".";

        let vec = self.inner.inner_mut();
        vec.pop();
        if no_components {
            // The placeholder gives way to the first real component.
            vec.clear();
        } else if !at_root {
            vec.push(b'/');
        }
        vec.extend_from_slice(component);
        vec.push(b'\0');
    }

    /// Returns true if the path starts at the root.
    pub fn is_absolute(&self) -> bool {
        self.inner.as_bytes().first() == Some(&b'/')
    }

    /// Returns true if the path is relative to the current directory.
    pub fn is_relative(&self) -> bool {
        !self.is_absolute()
    }

    /// Returns the length of the path, excluding the terminator. Canonical form is never shorter
    /// than `.` or `/`, so this is at least 1.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Always false: canonical form is at least `.` or `/`. Kept for interface symmetry with
    /// [`NulFreeString`].
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the canonical form without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        self.inner.as_bytes()
    }

    /// Returns the canonical form including the trailing terminator.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        self.inner.as_bytes_with_nul()
    }

    /// Returns a pointer to the start of the terminated path, suitable for passing to an OS API
    /// for the duration of the borrow.
    pub fn as_ptr(&self) -> *const u8 {
        self.inner.as_ptr()
    }

    /// Borrows the path as a terminated C string; the bridge to OS-facing collaborators.
    pub fn as_c_str(&self) -> &CStr {
        self.inner.as_c_str()
    }

    /// Borrows the underlying [`NulFreeString`].
    pub fn as_nul_free(&self) -> &NulFreeString {
        &self.inner
    }

    /// Unwraps the underlying [`NulFreeString`], discarding the canonical-form guarantee.
    pub fn into_nul_free(self) -> NulFreeString {
        self.inner
    }

    /// Returns an iterator over the path's components, excluding the root marker.
    ///
    /// # Examples
    /// ```
    /// # use nul_path::path::CanonicalPath;
    /// let path = CanonicalPath::new("/a/../b")?;
    /// let components: Vec<_> = path.components().collect();
    /// assert_eq!(components, [b"a".as_slice(), b"..", b"b"]);
    ///
    /// assert_eq!(CanonicalPath::root().components().count(), 0);
    /// # Ok::<(), nul_path::EmbeddedNulError>(())
    /// ```
    pub fn components(&self) -> Components<'_> {
        Components {
            path: self.inner.as_bytes(),
            head: 0,
        }
    }
}

impl Default for CanonicalPath {
    fn default() -> Self {
        CanonicalPath::current_dir()
    }
}

impl From<&NulFreeString> for CanonicalPath {
    /// Normalizes an already-validated string. Total: no failure mode remains once the input is
    /// known nul-free.
    fn from(value: &NulFreeString) -> Self {
        CanonicalPath {
            inner: NulFreeString::from_vec_with_nul_unchecked(normalize(value.as_bytes())),
        }
    }
}

impl From<NulFreeString> for CanonicalPath {
    fn from(value: NulFreeString) -> Self {
        CanonicalPath::from(&value)
    }
}

impl FromStr for CanonicalPath {
    type Err = EmbeddedNulError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CanonicalPath::new(s)
    }
}

impl AsRef<[u8]> for CanonicalPath {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Debug for CanonicalPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "CanonicalPath({:?})", String::from_utf8_lossy(self.as_bytes()))
    }
}

impl Display for CanonicalPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.as_bytes()))
    }
}
