#![cfg(test)]

use super::*;
use crate::error::{EmbeddedNulError, IndexOutOfBounds};

#[test]
fn test_new_validates() {
    let s = NulFreeString::new("hello").expect("nul-free input should validate");
    assert_eq!(s.as_bytes(), b"hello");
    assert_eq!(s.len(), 5);

    assert_eq!(
        NulFreeString::new("NUL\0here"),
        Err(EmbeddedNulError),
        "An embedded nul anywhere in the input should be rejected."
    );
    assert_eq!(NulFreeString::new("\0"), Err(EmbeddedNulError));
    assert_eq!(NulFreeString::new("trailing\0"), Err(EmbeddedNulError));
}

#[test]
fn test_sanitized_never_fails() {
    assert_eq!(NulFreeString::sanitized("NUL\0here", &[b'\0']).as_bytes(), b"NULhere");
    assert_eq!(
        NulFreeString::sanitized("NUL\0here", &[]).as_bytes(),
        b"NULhere",
        "Nul bytes should be stripped even when the strip set doesn't name them."
    );
    assert_eq!(NulFreeString::sanitized("a-b_c-d", b"-_").as_bytes(), b"abcd");
    assert_eq!(
        NulFreeString::sanitized("\0\0\0", &[b'\0']).as_bytes(),
        b"",
        "All-forbidden input should produce an empty result, not an error."
    );
    assert_eq!(NulFreeString::sanitized("", b"xyz").as_bytes(), b"");
}

#[test]
fn test_indexed_read() {
    let s = NulFreeString::new("abc").expect("valid");

    assert_eq!(s.get(0), Ok(b'a'));
    assert_eq!(s.get(2), Ok(b'c'));
    assert_eq!(
        s.get(3),
        Err(IndexOutOfBounds { index: 3, len: 3 }),
        "The terminator is representation, not content, and should not be readable."
    );
    assert_eq!(s[1], b'b');

    assert_eq!(s.get_back(0), Ok(b'c'));
    assert_eq!(s.get_back(2), Ok(b'a'));
    assert_eq!(s.get_back(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
}

#[test]
fn test_indexed_write_guards() {
    let mut s = NulFreeString::new("abc").expect("valid");

    s.set(1, b'x').expect("in-bounds non-nul write should succeed");
    assert_eq!(s.as_bytes(), b"axc");

    let before = s.clone();
    let err = s.set(1, b'\0').expect_err("writing a nul should fail");
    assert!(err.is_embedded_nul());
    assert_eq!(s, before, "A rejected write should leave the string unchanged.");

    let err = s.set(3, b'y').expect_err("out-of-bounds write should fail");
    assert!(err.is_out_of_bounds());
    assert_eq!(s, before);
}

#[test]
fn test_push_guards() {
    let mut s = NulFreeString::default();

    s.push(b'a').expect("non-nul push should succeed");
    assert_eq!(s.push(b'\0'), Err(EmbeddedNulError));
    s.push(b'b').expect("the string should still accept pushes after a rejection");

    assert_eq!(s.as_bytes(), b"ab");
    assert_eq!(s.as_bytes_with_nul(), b"ab\0");
}

#[test]
fn test_push_bytes_is_atomic() {
    let mut s = NulFreeString::new("base").expect("valid");
    let before = s.clone();

    assert_eq!(s.push_bytes("ab\0cd"), Err(EmbeddedNulError));
    assert_eq!(
        s.as_bytes_with_nul(),
        before.as_bytes_with_nul(),
        "A failed append should leave the destination byte-for-byte identical."
    );

    s.push_bytes("/path").expect("valid append");
    assert_eq!(s.as_bytes(), b"base/path");
}

#[test]
fn test_append() {
    let mut s = NulFreeString::new("ab").expect("valid");
    let other = NulFreeString::new("cd").expect("valid");

    s.append(&other);
    assert_eq!(s.as_bytes(), b"abcd");
    assert_eq!(s.as_bytes_with_nul(), b"abcd\0");

    s.append(&NulFreeString::default());
    assert_eq!(s.as_bytes(), b"abcd");
}

#[test]
fn test_terminated_view() {
    let s = NulFreeString::new("abc").expect("valid");

    assert_eq!(s.as_c_str().to_bytes(), b"abc");
    assert_eq!(s.as_c_str().to_bytes_with_nul(), s.as_bytes_with_nul());
    assert_eq!(s.as_bytes_with_nul().iter().filter(|ch| **ch == b'\0').count(), 1);

    let empty = NulFreeString::default();
    assert_eq!(empty.as_bytes_with_nul(), b"\0");
}

#[cfg(unix)]
#[test]
fn test_c_string_bridge() {
    let s = NulFreeString::new("spanning the ffi boundary").expect("valid");

    // The contract OS APIs rely on: the first nul reachable from as_ptr is the terminator.
    let reported = unsafe { libc::strlen(s.as_ptr().cast()) };
    assert_eq!(reported, s.len());
}

#[test]
fn test_value_semantics() {
    let a = NulFreeString::new("abc").expect("valid");
    let b: NulFreeString = "abc".parse().expect("valid");
    let c = NulFreeString::new("abd").expect("valid");

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.iter().collect::<Vec<_>>(), vec![b'a', b'b', b'c']);
    assert_eq!((&a).into_iter().rev().next(), Some(b'c'));
    assert_eq!(a.to_string(), "abc");
    assert_eq!(Vec::from(a), b"abc".to_vec());
}
