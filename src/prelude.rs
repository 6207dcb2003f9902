//! Commonly used items for convenient importing.
//!
//! The prelude re-exports everything needed to format values as wide text
//! and to work with the wide-string utilities, so one use statement covers
//! typical call sites.
//!
//! # Usage
//!
//! ```
//! use std::path::Path;
//!
//! use widefmt::prelude::*;
//!
//! let archive = Path::new("backup.7z");
//! let line = format!("extracting {:>12}", wide(archive));
//! assert_eq!(line, "extracting    backup.7z");
//! ```
//!
//! # What's Included
//!
//! - **[`wide`]** and **[`wide_error`]**: entry points into wide rendering
//! - **[`WideFmt`]**: the trait to implement for your own types
//! - **[`join`]**, **[`to_lowercase`]**, **[`widen`]**: the string utilities
//! - **[`U16Str`]** and **[`U16String`]**: the wide string types, re-exported
//!   from [`widestring`]

pub use widestring::{U16Str, U16String};

pub use crate::{WideFmt, join, to_lowercase, wide, wide_error, widen};
