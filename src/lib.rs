#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
// Make docs.rs generate better docs
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Wide-string rendering for [`core::fmt`].
//!
//! ## Overview
//!
//! This crate lets a fixed set of value types (narrow strings, errors,
//! filesystem paths) be formatted as wide, 16-bit code unit text with the
//! exact same format-specifier syntax that native wide strings use. It does
//! not reimplement any part of the formatting machinery: specifier parsing,
//! argument binding, and output handling all stay inside [`core::fmt`].
//! Every type this crate supports is rendered by *reducing* it to an
//! already-renderable representation and delegating, so width, fill,
//! alignment, and precision behave identically for every supported type.
//!
//! Wide strings themselves come from the [`widestring`] crate
//! ([`U16Str`]/[`U16String`]), which tolerates ill-formed UTF-16 the same
//! way the platform APIs that produce such strings do.
//!
//! Two free-standing wide-string utilities round out the crate: [`join`] and
//! [`to_lowercase`]. They are independent of the rendering support and of
//! each other.
//!
//! ## Quick Example
//!
//! ```
//! use std::{io, path::Path};
//!
//! use widefmt::{join, to_lowercase, wide};
//! use widestring::U16String;
//!
//! // Every supported type renders through the same format-spec syntax:
//! assert_eq!(format!("{:>8}", wide("narrow")), "  narrow");
//! assert_eq!(format!("{}", wide(Path::new("/tmp/x"))), "/tmp/x");
//!
//! let error = io::Error::other("connection reset");
//! assert_eq!(format!("{}", wide(&error)), "connection reset");
//!
//! // Wide-string utilities:
//! let lines = [U16String::from_str("alpha"), U16String::from_str("beta")];
//! let joined = join(&lines, U16String::from_str("; "));
//! assert_eq!(joined, U16String::from_str("alpha; beta; "));
//! assert_eq!(to_lowercase(&joined), joined);
//! ```
//!
//! ## How rendering works
//!
//! Rendering is a chain of reductions. Each supported type reduces to a
//! previously supported representation, terminating at the native
//! wide-string renderer, which hands the final text to
//! [`Formatter::pad`](core::fmt::Formatter::pad), the point where the
//! engine applies the parsed format specification.
//!
//! | Value | Reduction | Delegates to |
//! |---|---|---|
//! | [`U16Str`] / [`U16String`] | lossy UTF-16 decode | the engine |
//! | [`str`] / `String` | widen each *byte* to one code unit | wide renderer |
//! | `dyn Error` | extract the diagnostic message | narrow renderer |
//! | `std::io::Error` | extract the human-readable message | narrow renderer |
//! | `OsStr`, `Path` | platform-native representation | wide or narrow renderer |
//!
//! The adapters are pure and hold no state; whatever errors the engine
//! raises pass through them untouched.
//!
//! ## The widening contract
//!
//! The narrow-to-wide step is a raw per-byte expansion: one byte becomes the
//! numerically equal code unit. It is **not** a UTF-8 decode. ASCII input
//! renders exactly as expected; multi-byte sequences render as mojibake:
//!
//! ```
//! use widefmt::wide;
//!
//! assert_eq!(format!("{}", wide("plain ascii")), "plain ascii");
//! assert_eq!(format!("{}", wide("café")), "cafÃ©"); // 'é' is 0xC3 0xA9 in UTF-8
//! ```
//!
//! This is the documented contract, not a defect to work around. Use
//! [`U16String::from_str`] when you want an encoding-aware conversion
//! instead.
//!
//! ## Cargo Features
//!
//! - **`std`** *(default)*: enables the adapters for `std::io::Error`,
//!   `OsStr`, `OsString`, `Path`, and `PathBuf`. Without it the crate is
//!   `no_std` + `alloc`: wide strings, narrow strings, `dyn Error`, and both
//!   utilities keep working.
extern crate alloc;

pub mod adapters;
pub mod prelude;
pub mod util;

pub use widestring::{U16Str, U16String};

pub use crate::{
    adapters::{Wide, WideFmt, wide, wide_error},
    util::{join, to_lowercase, widen},
};
