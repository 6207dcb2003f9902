//! Basic tour of wide rendering and the string utilities.
//!
//! This demo shows the fundamental pieces:
//! 1. Formatting narrow strings, errors, and paths as wide text
//! 2. One format-spec syntax applying uniformly across all adapters
//! 3. Joining and lowercasing wide strings

use std::{io, path::Path};

use widefmt::prelude::*;

fn main() {
    // Narrow strings widen byte-for-byte and then format like wide text.
    println!("{:>28}", wide("loading archive index"));

    // Errors render their diagnostic message; the format spec still applies.
    let error = io::Error::other("segment checksum mismatch");
    println!("[{:^40}]", wide_error(&error));

    // Paths render their platform-native text.
    let archive = Path::new("/var/backups/site.7z");
    println!("extracting {}", wide(archive));

    // join appends the separator after every element, including the last.
    let fields = [
        U16String::from_str("name=site"),
        U16String::from_str("parts=3"),
        U16String::from_str("codec=lzma2"),
    ];
    let manifest_line = join(&fields, U16String::from_str(";"));
    println!("{}", wide(&manifest_line));

    // to_lowercase is a fixed-table, per-character mapping: no locale, same
    // result on every platform.
    let id = U16String::from_str("SITE-Backup-2024");
    println!("normalized id: {}", wide(&to_lowercase(&id)));
}
