//! Hunk addition extraction
//!
//! Diff hunks mix context, added and removed lines. Only added lines can
//! carry accepted-suggestion text, so matching runs against the added-only
//! blob extracted here. The external `unidiff` parser owns the diff format;
//! this module only rebuilds a hunk's raw marker-prefixed body from it.

use unidiff::Hunk;

/// The added text of one hunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Additions {
    /// The `+` lines with the marker stripped, rejoined with `\n`,
    /// original order preserved.
    pub text: String,
    /// 0-based index, within the hunk's full line sequence, of the first
    /// added line. `None` when the hunk adds nothing. Needed to translate
    /// added-blob line numbers back to full-file line numbers.
    pub start_offset: Option<usize>,
}

/// Rebuild the raw body of a hunk: one marker-prefixed (` `/`+`/`-`) line
/// per diff line, `\n`-joined.
pub fn hunk_body(hunk: Hunk) -> String {
    hunk.into_iter()
        .map(|line| format!("{}{}", line.line_type, line.value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Extract the added lines of a hunk body.
pub fn additions(body: &str) -> Additions {
    let mut added = Vec::new();
    let mut start_offset = None;
    for (idx, line) in body.split('\n').enumerate() {
        if let Some(stripped) = line.strip_prefix('+') {
            if start_offset.is_none() {
                start_offset = Some(idx);
            }
            added.push(stripped);
        }
    }
    Additions {
        text: added.join("\n"),
        start_offset,
    }
}

/// Strip the `a/` or `b/` prefix git puts on diff file names, so they
/// compare equal to the paths recorded in the accept log.
pub fn strip_git_prefix(name: &str) -> &str {
    name.strip_prefix("a/")
        .or_else(|| name.strip_prefix("b/"))
        .unwrap_or(name)
}
