//! Offset-to-position arithmetic
//!
//! Match spans come out of the matcher as byte offsets within a hunk's
//! added-lines blob. This module turns them into line/character positions
//! and composes those with the hunk's placement to get file-relative lines
//! in the new version of the file.
//!
//! Offsets and character columns are UTF-8 byte quantities throughout,
//! matching what `str::find` produces. The accept log's own `position`
//! field never feeds into this arithmetic, so its editor-side column
//! semantics do not matter here.

use crate::schema::Position;

/// Convert a byte offset within `blob` into a position.
///
/// The line is 1-based: the number of `\n` in `blob[..offset]` plus one.
/// The character is the offset minus the length of all preceding lines
/// joined with `\n`.
pub fn offset_to_position(blob: &str, offset: usize) -> Position {
    let prefix = &blob[..offset];
    let line = prefix.matches('\n').count() + 1;
    let character = match prefix.rfind('\n') {
        Some(last_newline) => offset - last_newline,
        None => offset,
    };
    Position { line, character }
}

/// Translate a 1-based line within a hunk's added-lines blob into a
/// 1-based line in the new version of the full file.
///
/// `addition_start_offset` is the 0-based index of the first added line
/// within the hunk body, `hunk_target_start` the 1-based line where the
/// hunk begins in the new file. The same composition is used for every
/// range the generation pass emits, so generated ranges and the annotation
/// pass agree on numbering.
pub fn to_file_line(
    added_blob_line: usize,
    addition_start_offset: usize,
    hunk_target_start: usize,
) -> usize {
    (added_blob_line - 1) + addition_start_offset + hunk_target_start
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_on_first_line() {
        let pos = offset_to_position("hello\nworld", 3);
        assert_eq!(pos, Position { line: 1, character: 3 });
    }

    #[test]
    fn test_offset_on_later_line() {
        let blob = "one\ntwo\nthree";
        let offset = blob.find("three").unwrap();
        let pos = offset_to_position(blob, offset);
        assert_eq!(pos.line, 3);
        assert_eq!(pos.character, offset - blob.rfind('\n').unwrap());
    }

    #[test]
    fn test_offset_at_start() {
        assert_eq!(offset_to_position("abc", 0), Position { line: 1, character: 0 });
    }

    #[test]
    fn test_to_file_line_composition() {
        // A hunk starting at new-file line 7, with three context lines
        // before the first addition: the first added-blob line lands on
        // file line 10.
        assert_eq!(to_file_line(1, 3, 7), 10);
        assert_eq!(to_file_line(2, 3, 7), 11);
        // Additions at the very start of a hunk keep the hunk's own line.
        assert_eq!(to_file_line(1, 0, 42), 42);
    }
}
