//! Free-standing wide-string utilities.
//!
//! Nothing here touches the rendering support in
//! [`adapters`](crate::adapters): these are plain value transformations over
//! [`U16Str`]/[`U16String`], total over their whole input domain. They
//! consult no ambient state. In particular, [`to_lowercase`] uses a fixed
//! character table rather than the process locale, so results are identical
//! on every platform and under every locale configuration, and every
//! function here is safe to call from any number of threads at once.

use alloc::vec::Vec;

use widestring::{U16Str, U16String};

/// Joins the elements of a sequence, appending the separator after *every*
/// element.
///
/// The output is `e0 sep e1 sep ... eN sep`, with a trailing separator
/// after the last element. This is not the conventional insert-between join:
/// the contract is a delimiter *terminating* each element, the shape used
/// when accumulating lines or records where a trailing delimiter is
/// harmless. Callers that want insert-between semantics can truncate the
/// final separator off the result.
///
/// Elements are consumed in the sequence's own iteration order. An empty
/// sequence yields the empty string. Never fails.
///
/// # Examples
///
/// ```
/// use widefmt::join;
/// use widestring::{U16Str, U16String};
///
/// let parts = [
///     U16String::from_str("a"),
///     U16String::from_str("b"),
///     U16String::from_str("c"),
/// ];
/// assert_eq!(
///     join(&parts, U16String::from_str(", ")),
///     U16String::from_str("a, b, c, ")
/// );
///
/// let empty: [&U16Str; 0] = [];
/// assert_eq!(join(empty, U16String::from_str(", ")), U16String::new());
/// ```
pub fn join<I>(elements: I, separator: impl AsRef<U16Str>) -> U16String
where
    I: IntoIterator,
    I::Item: AsRef<U16Str>,
{
    let separator = separator.as_ref();
    let mut joined = U16String::new();
    for element in elements {
        joined.push(element.as_ref());
        joined.push(separator);
    }
    joined
}

/// Converts a wide string to lowercase, one character at a time.
///
/// Each decoded character is mapped independently through the built-in
/// simple lowercase table; characters whose lowercase form is anything other
/// than a single character (no mapping, or a multi-character expansion such
/// as U+0130) pass through unchanged, and so do unpaired surrogate code
/// units. The input is left untouched. Never fails, and the operation is
/// idempotent.
///
/// # Examples
///
/// ```
/// use widefmt::to_lowercase;
/// use widestring::U16String;
///
/// let shouted = U16String::from_str("WARNING: Disk Full");
/// assert_eq!(
///     to_lowercase(&shouted),
///     U16String::from_str("warning: disk full")
/// );
/// assert_eq!(to_lowercase(&U16String::new()), U16String::new());
/// ```
pub fn to_lowercase(s: &U16Str) -> U16String {
    let mut units = Vec::with_capacity(s.len());
    for decoded in core::char::decode_utf16(s.as_slice().iter().copied()) {
        match decoded {
            Ok(c) => {
                let mut buf = [0u16; 2];
                units.extend_from_slice(lowercase_char(c).encode_utf16(&mut buf));
            }
            Err(unpaired) => units.push(unpaired.unpaired_surrogate()),
        }
    }
    U16String::from_vec(units)
}

/// Per-character mapping only: multi-character expansions do not apply.
fn lowercase_char(c: char) -> char {
    let mut mapped = c.to_lowercase();
    match (mapped.next(), mapped.next()) {
        (Some(lower), None) => lower,
        _ => c,
    }
}

/// Widens a byte string: one byte becomes one code unit.
///
/// This is the reduction the narrow-string adapter is built on, exposed for
/// callers that need to pre-widen values themselves. It is a raw expansion,
/// **not** a character-encoding decode: each byte maps to the numerically
/// equal code unit, so ASCII is preserved exactly while multi-byte encoded
/// input (UTF-8 bytes ≥ 0x80) turns into mojibake.
///
/// # Examples
///
/// ```
/// use widefmt::widen;
/// use widestring::U16String;
///
/// assert_eq!(widen(b"ascii"), U16String::from_str("ascii"));
///
/// // 'é' is two bytes in UTF-8, so it widens to two code units.
/// let wide = widen("café".as_bytes());
/// assert_eq!(wide.len(), 5);
/// assert_eq!(wide, U16String::from_str("cafÃ©"));
/// ```
pub fn widen(bytes: &[u8]) -> U16String {
    let units: Vec<u16> = bytes.iter().map(|&byte| u16::from(byte)).collect();
    U16String::from_vec(units)
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn join_appends_separator_after_every_element() {
        let parts = [U16String::from_str("a"), U16String::from_str("b")];
        let joined = join(&parts, U16String::from_str("|"));
        assert_eq!(joined, U16String::from_str("a|b|"));
    }

    #[test]
    fn join_single_element_still_gets_separator() {
        let parts = [U16String::from_str("a")];
        assert_eq!(
            join(&parts, U16String::from_str(",")),
            U16String::from_str("a,")
        );
    }

    #[test]
    fn lowercase_passes_unpaired_surrogates_through() {
        let input = U16String::from_vec(vec![0xD800u16, u16::from(b'A')]);
        let lowered = to_lowercase(&input);
        assert_eq!(lowered.as_slice(), &[0xD800, u16::from(b'a')]);
    }

    #[test]
    fn widen_maps_each_byte_to_the_equal_unit() {
        let wide = widen(&[0x00, 0x41, 0x80, 0xFF]);
        assert_eq!(wide.as_slice(), &[0x0000, 0x0041, 0x0080, 0x00FF]);
    }
}
