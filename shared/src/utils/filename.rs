//! Filename sanitization for object storage paths
//!
//! Storage keys only tolerate a narrow character set, while uploaded files
//! arrive with arbitrary user-supplied names. The sanitizer normalizes to
//! NFKD, strips combining marks (diacritics), collapses whitespace runs to a
//! single underscore, and drops anything outside `[A-Za-z0-9._-]`.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Sanitize a user-supplied filename into a storage-safe key segment.
pub fn sanitize_file_name(name: &str) -> String {
    let stripped: String = name.nfkd().filter(|c| !is_combining_mark(*c)).collect();

    let mut out = String::with_capacity(stripped.len());
    let mut in_whitespace = false;
    for c in stripped.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('_');
                in_whitespace = true;
            }
        } else {
            in_whitespace = false;
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                out.push(c);
            }
        }
    }
    out
}
