//! Adapters that render non-wide values through the wide-string renderer.
//!
//! The formatting engine ([`core::fmt`]) already knows how to apply an
//! arbitrary format specification (width, fill, alignment, precision) to a
//! piece of text. This module plugs additional types into that machinery
//! without duplicating any of it: every adapter is a *reduction* to a
//! representation the engine can already render, followed by delegation.
//!
//! The reduction chains all terminate at the [`U16Str`] renderer, which
//! decodes the code units and hands the text to
//! [`Formatter::pad`](core::fmt::Formatter::pad):
//!
//! - [`str`] widens each byte to one code unit and renders as [`U16Str`].
//! - `dyn Error` extracts its diagnostic message and renders as [`str`].
//! - `std::io::Error` extracts its message and renders as [`str`].
//! - `OsStr` takes its platform-native representation: UTF-16 code units on
//!   Windows (rendered as [`U16Str`] directly), raw bytes elsewhere
//!   (rendered through the byte-widening [`str`] path).
//! - `Path` reduces to its `OsStr`.
//!
//! Because each step strictly delegates, an adapter's output is always
//! byte-identical to formatting its reduced representation under the same
//! format context. There is nothing to configure and no state anywhere in
//! the chain.
//!
//! # Examples
//!
//! Values enter the engine through the [`wide`] proxy:
//!
//! ```
//! use std::path::Path;
//!
//! use widefmt::wide;
//!
//! let report = Path::new("/var/log/report.txt");
//! assert_eq!(format!("{:>20}", wide(report)), " /var/log/report.txt");
//! assert_eq!(format!("{:-<10}", wide("done")), "done------");
//! ```

use alloc::string::ToString;
use core::fmt;

use widestring::{U16Str, U16String};

use crate::util::widen;

/// A value that can be rendered as wide text by the formatting engine.
///
/// This is the customization point the adapters implement: a single method
/// with the same shape as [`Display::fmt`](core::fmt::Display::fmt), so the
/// engine can drive it through [`Wide`] wherever a formattable value is
/// expected. Implementations reduce `self` to an already-supported
/// representation and delegate; they do not interpret the format
/// specification themselves, and they pass the engine's errors through
/// unchanged.
///
/// # Implementing for your own types
///
/// Reduce to one of the supported representations and delegate to its
/// implementation:
///
/// ```
/// use core::fmt;
///
/// use widefmt::{WideFmt, wide};
///
/// struct Ticket(u32);
///
/// impl WideFmt for Ticket {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         WideFmt::fmt(format!("ticket #{}", self.0).as_str(), f)
///     }
/// }
///
/// assert_eq!(format!("{:>12}", wide(&Ticket(7))), "   ticket #7");
/// ```
pub trait WideFmt {
    /// Renders `self` as wide text into the given format context.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Display proxy connecting a [`WideFmt`] value to the formatting engine.
///
/// Constructed by [`wide`] or [`wide_error`]. The proxy implements
/// [`Display`](core::fmt::Display) and [`Debug`](core::fmt::Debug) by
/// forwarding to the value's [`WideFmt`] implementation, so the full format
/// specification written at the call site reaches the terminal renderer
/// intact. Both formatting traits produce the same output; there is no
/// separate debug representation of wide text.
///
/// ```
/// use widefmt::wide;
///
/// assert_eq!(format!("{:^11}", wide("status")), "  status   ");
/// assert_eq!(format!("{:?}", wide("status")), "status");
/// ```
pub struct Wide<'a, T: ?Sized>(&'a T);

/// Wraps a value for wide rendering.
///
/// The returned proxy borrows `value` and can be formatted with any format
/// specification; see [`Wide`].
///
/// # Examples
///
/// ```
/// use widefmt::wide;
/// use widestring::U16String;
///
/// let name = U16String::from_str("carol");
/// assert_eq!(format!("{:>8}", wide(&name)), "   carol");
/// assert_eq!(format!("{:.3}", wide("carolina")), "car");
/// ```
pub fn wide<T: WideFmt + ?Sized>(value: &T) -> Wide<'_, T> {
    Wide(value)
}

/// Wraps any error for wide rendering of its diagnostic message.
///
/// Convenience over `wide(&error as &dyn Error)`: coerces a concrete error
/// type to the `dyn Error` adapter, which renders the error's message text.
///
/// # Examples
///
/// ```
/// use std::io;
///
/// use widefmt::wide_error;
///
/// let error = io::Error::other("disk offline");
/// assert_eq!(format!("{}", wide_error(&error)), "disk offline");
/// assert_eq!(format!("{:>14}", wide_error(&error)), "  disk offline");
/// ```
pub fn wide_error<'a, E>(error: &'a E) -> Wide<'a, dyn core::error::Error + 'a>
where
    E: core::error::Error + 'a,
{
    Wide(error)
}

impl<T: ?Sized> Clone for Wide<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Wide<'_, T> {}

impl<T: WideFmt + ?Sized> fmt::Display for Wide<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        WideFmt::fmt(self.0, f)
    }
}

impl<T: WideFmt + ?Sized> fmt::Debug for Wide<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        WideFmt::fmt(self.0, f)
    }
}

/// The terminal renderer: every reduction chain ends here.
///
/// The code units are decoded as UTF-16, with unpaired surrogates rendered
/// as U+FFFD, and the resulting text is handed to
/// [`Formatter::pad`](core::fmt::Formatter::pad), which applies the parsed
/// width, fill, alignment, and precision.
impl WideFmt for U16Str {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.to_string_lossy())
    }
}

impl WideFmt for U16String {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        WideFmt::fmt(self.as_ustr(), f)
    }
}

/// Narrow strings widen each byte to one code unit and render as wide
/// text. See [`widen`](crate::util::widen) for the exact, non-decoding
/// contract.
impl WideFmt for str {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        WideFmt::fmt(&widen(self.as_bytes()), f)
    }
}

impl WideFmt for alloc::string::String {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        WideFmt::fmt(self.as_str(), f)
    }
}

/// Errors render their diagnostic message as a narrow string.
///
/// Only the message of this error is rendered; sources are not traversed.
///
/// ```
/// use std::{error::Error, io};
///
/// use widefmt::wide;
///
/// let error: Box<dyn Error> = Box::new(io::Error::other("timed out"));
/// assert_eq!(format!("{}", wide(&*error)), "timed out");
/// ```
impl<'a> WideFmt for dyn core::error::Error + 'a {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        WideFmt::fmt(self.to_string().as_str(), f)
    }
}

impl<'a> WideFmt for dyn core::error::Error + Send + Sync + 'a {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        WideFmt::fmt(self.to_string().as_str(), f)
    }
}

/// I/O errors carry the OS error code; rendering reduces them to their
/// human-readable message.
///
/// ```
/// use std::io;
///
/// use widefmt::wide;
///
/// let error = io::Error::other("permission denied");
/// assert_eq!(format!("{}", wide(&error)), "permission denied");
/// ```
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl WideFmt for std::io::Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        WideFmt::fmt(self.to_string().as_str(), f)
    }
}

/// OS strings render their platform-native representation: UTF-16 code
/// units on Windows, raw bytes (widened) on Unix.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl WideFmt for std::ffi::OsStr {
    #[cfg(windows)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::os::windows::ffi::OsStrExt;

        let native: alloc::vec::Vec<u16> = self.encode_wide().collect();
        WideFmt::fmt(U16Str::from_slice(&native), f)
    }

    #[cfg(unix)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::os::unix::ffi::OsStrExt;

        WideFmt::fmt(&widen(self.as_bytes()), f)
    }

    #[cfg(not(any(windows, unix)))]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        WideFmt::fmt(&*self.to_string_lossy(), f)
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl WideFmt for std::ffi::OsString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        WideFmt::fmt(self.as_os_str(), f)
    }
}

/// Paths render their platform-native text.
///
/// ```
/// use std::path::Path;
///
/// use widefmt::wide;
///
/// assert_eq!(format!("{}", wide(Path::new("/tmp/x"))), "/tmp/x");
/// ```
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl WideFmt for std::path::Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        WideFmt::fmt(self.as_os_str(), f)
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl WideFmt for std::path::PathBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        WideFmt::fmt(self.as_path(), f)
    }
}
