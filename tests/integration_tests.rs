//! Integration tests for the wide rendering adapters and the wide-string
//! utilities.
//!
//! The suite is grouped by concern:
//!
//! - **Delegation invariant**: an adapter's output is byte-identical to
//!   formatting its reduced representation under the same format spec
//! - **Format spec propagation**: width, fill, alignment, and precision
//!   reach the terminal renderer for every adapter
//! - **Error adapters**: message extraction for derived error types, boxed
//!   `dyn Error`, and `io::Error`
//! - **Path adapters**: platform-native text rendering
//! - **Widening**: the one-byte-to-one-code-unit contract
//! - **`join`**: the trailing-separator contract and iteration order
//! - **`to_lowercase`**: determinism, idempotence, and passthrough cases
//! - **Auto traits**: `Wide` stays `Copy`, `Send`, and `Sync`

use std::{error::Error, io, path::Path};

use static_assertions::assert_impl_all;
use widefmt::{Wide, join, to_lowercase, wide, wide_error, widen};
use widestring::{U16Str, U16String};

#[derive(Debug, thiserror::Error)]
#[error("mount point {path} is gone")]
struct MountGone {
    path: String,
}

#[derive(Debug, thiserror::Error)]
#[error("archive unreadable")]
struct ArchiveUnreadable {
    #[source]
    source: io::Error,
}

// --- Delegation invariant ---

#[test]
fn narrow_adapter_matches_widened_rendering() {
    let narrow = "hello";
    let widened = widen(narrow.as_bytes());

    assert_eq!(format!("{}", wide(narrow)), format!("{}", wide(&widened)));
    assert_eq!(
        format!("{:>10}", wide(narrow)),
        format!("{:>10}", wide(&widened))
    );
    assert_eq!(
        format!("{:*<7}", wide(narrow)),
        format!("{:*<7}", wide(&widened))
    );
    assert_eq!(
        format!("{:.3}", wide(narrow)),
        format!("{:.3}", wide(&widened))
    );
    assert_eq!(format!("{}", wide(narrow)), "hello");
}

#[test]
fn error_adapter_matches_message_rendering() {
    let error = io::Error::other("checksum mismatch");
    let message = error.to_string();

    assert_eq!(
        format!("{:^24}", wide(&error)),
        format!("{:^24}", wide(message.as_str()))
    );
}

#[test]
fn path_adapter_matches_native_text_rendering() {
    let path = Path::new("/tmp/x");

    assert_eq!(format!("{}", wide(path)), "/tmp/x");
    assert_eq!(
        format!("{:>12}", wide(path)),
        format!("{:>12}", wide("/tmp/x"))
    );
}

// --- Format spec propagation ---

#[test]
fn width_fill_alignment_and_precision_apply_to_wide_strings() {
    let s = U16String::from_str("abc");

    assert_eq!(format!("{}", wide(&s)), "abc");
    assert_eq!(format!("{:*>8}", wide(&s)), "*****abc");
    assert_eq!(format!("{:-<8}", wide(&s)), "abc-----");
    assert_eq!(format!("{:^7}", wide(&s)), "  abc  ");
    assert_eq!(format!("{:.2}", wide(&s)), "ab");
}

#[test]
fn debug_formatting_matches_display_formatting() {
    let s = U16String::from_str("abc");

    assert_eq!(format!("{:?}", wide(&s)), format!("{}", wide(&s)));
    assert_eq!(format!("{:?}", wide("abc")), "abc");
}

// --- Error adapters ---

#[test]
fn derived_error_renders_its_message() {
    let error = MountGone {
        path: "/mnt/data".to_string(),
    };

    assert_eq!(
        format!("{}", wide_error(&error)),
        "mount point /mnt/data is gone"
    );
}

#[test]
fn error_sources_are_not_traversed() {
    let error = ArchiveUnreadable {
        source: io::Error::other("sector unreadable"),
    };

    assert_eq!(format!("{}", wide_error(&error)), "archive unreadable");
}

#[test]
fn boxed_dyn_error_renders_through_wide() {
    let error: Box<dyn Error> = Box::new(io::Error::other("timed out"));
    assert_eq!(format!("{}", wide(&*error)), "timed out");

    let error: Box<dyn Error + Send + Sync> = Box::new(io::Error::other("refused"));
    assert_eq!(format!("{:>9}", wide(&*error)), "  refused");
}

#[test]
fn io_error_renders_its_message() {
    let error = io::Error::other("permission denied");

    assert_eq!(format!("{}", wide(&error)), "permission denied");
    assert_eq!(format!("{:>20}", wide(&error)), "   permission denied");
}

// --- Path adapters ---

#[test]
fn paths_render_platform_native_text() {
    let path = Path::new("archive").join("segment.bin");
    let expected = path.to_string_lossy().into_owned();

    assert_eq!(format!("{}", wide(path.as_path())), expected);
    assert_eq!(format!("{}", wide(&path)), expected);
    assert_eq!(format!("{}", wide(path.as_os_str())), expected);
}

// --- Widening ---

#[test]
fn widening_is_a_raw_per_byte_expansion() {
    let wide_units = widen(&[0x00, 0x41, 0x80, 0xFF]);
    assert_eq!(wide_units.as_slice(), &[0x0000, 0x0041, 0x0080, 0x00FF]);

    // Multi-byte UTF-8 input turns into mojibake, one unit per byte.
    assert_eq!(format!("{}", wide("café")), "cafÃ©");
    assert_eq!(widen("café".as_bytes()).len(), 5);
}

// --- join ---

#[test]
fn join_of_empty_sequence_is_empty() {
    let empty: [&U16Str; 0] = [];
    assert_eq!(join(empty, U16String::from_str(", ")), U16String::new());
}

#[test]
fn join_appends_separator_after_the_last_element() {
    let one = [U16String::from_str("a")];
    assert_eq!(
        join(&one, U16String::from_str(",")),
        U16String::from_str("a,")
    );

    let three = [
        U16String::from_str("a"),
        U16String::from_str("b"),
        U16String::from_str("c"),
    ];
    assert_eq!(
        join(&three, U16String::from_str(", ")),
        U16String::from_str("a, b, c, ")
    );
}

#[test]
fn join_respects_iteration_order() {
    let parts = vec![
        U16String::from_str("z"),
        U16String::from_str("a"),
        U16String::from_str("m"),
    ];
    assert_eq!(
        join(&parts, U16String::from_str("-")),
        U16String::from_str("z-a-m-")
    );
}

#[test]
fn join_accepts_borrowed_elements() {
    let left = U16String::from_str("left");
    let right = U16String::from_str("right");
    let parts: Vec<&U16Str> = vec![&left, &right];

    assert_eq!(
        join(parts, U16String::from_str(" | ")),
        U16String::from_str("left | right | ")
    );
}

// --- to_lowercase ---

#[test]
fn lowercase_of_empty_is_empty() {
    assert_eq!(to_lowercase(&U16String::new()), U16String::new());
}

#[test]
fn lowercase_maps_ascii() {
    assert_eq!(
        to_lowercase(&U16String::from_str("ABC")),
        U16String::from_str("abc")
    );
    assert_eq!(
        to_lowercase(&U16String::from_str("MiXeD case 123!")),
        U16String::from_str("mixed case 123!")
    );
}

#[test]
fn lowercase_uses_the_fixed_table_beyond_ascii() {
    assert_eq!(
        to_lowercase(&U16String::from_str("ÀÉÎ")),
        U16String::from_str("àéî")
    );
    assert_eq!(
        to_lowercase(&U16String::from_str("ΣΙΓΜΑ")),
        U16String::from_str("σιγμα")
    );
}

#[test]
fn lowercase_is_idempotent() {
    for sample in ["", "ABC", "MiXeD case 123!", "ÀÉÎ", "İstanbul", "ΣΙΓΜΑ"] {
        let input = U16String::from_str(sample);
        let once = to_lowercase(&input);
        assert_eq!(to_lowercase(&once), once);
    }
}

#[test]
fn lowercase_leaves_multi_character_expansions_unchanged() {
    // U+0130 lowercases to two characters under full case mapping, so the
    // per-character contract leaves it alone.
    let dotted = U16String::from_str("İ");
    assert_eq!(to_lowercase(&dotted), dotted);
}

// --- Auto traits ---

assert_impl_all!(Wide<'static, U16Str>: Copy, Send, Sync);
assert_impl_all!(Wide<'static, str>: Copy, Send, Sync);
assert_impl_all!(Wide<'static, Path>: Copy, Send, Sync);
