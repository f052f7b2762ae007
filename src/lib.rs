//! A safety layer for handing strings to operating system APIs.
//!
//! OS string APIs (`open`, `execve`, everything taking a `char *`) treat a nul byte as the end of
//! the string. A nul smuggled into the middle of a path silently truncates it at the syscall
//! boundary, which is a well-worn security bug class. This crate makes that unrepresentable.
//!
//! # Components
//! Two value types, the second built strictly on the first:
//!
//! - [`NulFreeString`](string::NulFreeString): an owned, mutable byte string that cannot contain
//!   an embedded nul at any observable point. Every constructor and mutator guards the invariant,
//!   so holders may borrow the contents as a terminated C string without a defensive scan.
//! - [`CanonicalPath`](path::CanonicalPath): a `NulFreeString` additionally held in lexically
//!   normalized POSIX form. Redundant separators, trailing separators and `.` components are
//!   collapsed deterministically, without ever touching the filesystem.
//!
//! Notably, `..` components are *not* resolved against their preceding component. Lexical
//! normalization has no authority to assume the preceding component is a real, traversable
//! directory; symlinks make that assumption unsound. Resolving `..` is `realpath`'s job, not ours.
//!
//! # Error Handling
//! Errors are strongly typed, using enums for static dispatch rather than dynamic, with structs
//! (often ZSTs) that implement [`Error`](std::error::Error). Every violation is a local,
//! synchronous check: a failed operation returns its error and leaves the target untouched.
//!
//! # Concurrency
//! Both types are plain owned values with no interior mutability and no I/O, so they are `Send`
//! and `Sync` structurally. Callers sharing an instance across threads synchronize externally or
//! clone.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod path;
pub mod string;

mod error;

pub use error::*;
