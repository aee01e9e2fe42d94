//! File name sanitizing.

/// Characters that are not allowed in file names on common platforms.
pub const RESERVED_FILENAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Replace every reserved character with `_`.
///
/// Idempotent: the output contains no reserved characters.
#[must_use]
pub fn sanitize_filename(name: &str) -> String {
    name.chars().map(|c| if RESERVED_FILENAME_CHARS.contains(&c) { '_' } else { c }).collect()
}
