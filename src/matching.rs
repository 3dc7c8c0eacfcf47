//! Suggestion-to-hunk matching
//!
//! Accepted-suggestion text frequently survives only partially after the
//! user edits around it, so matching is an ordered chain of strategies:
//! an exact substring search first (authoritative when it hits), then a
//! longest-common-substring fallback that trades precision for recall when
//! a reasonably long common span still exists. Suggestions that neither
//! strategy can locate were rewritten by the user and are dropped.

use tracing::debug;

use crate::schema::AcceptLogLine;

/// Minimum length, in bytes, of a common-substring fallback match.
/// Shorter common spans ("return;", brace lines) are too likely to be
/// coincidental. The bound is inclusive: a 20-byte span is accepted.
pub const MIN_COMMON_LEN: usize = 20;

/// A matched suggestion with its byte span within a hunk's added text.
#[derive(Debug, Clone, PartialEq)]
pub struct HunkMatch<'a> {
    pub accept: &'a AcceptLogLine,
    pub start: usize,
    pub end: usize,
}

type Span = (usize, usize);
type MatchFn = fn(&str, &str) -> Option<Span>;

/// Ordered matching strategies; the first one to produce a span wins.
///
/// An edit-distance gate (Levenshtein ratio against a 0.8 similarity
/// threshold) used to sit between these two but skipped too many true
/// positives, so it is gone.
const STRATEGIES: &[(&str, MatchFn)] = &[
    ("exact", exact_match),
    ("common-substring", common_substring_match),
];

/// Find, for each accepted suggestion, a best-effort span within a hunk's
/// added text. Suggestions are tried independently and in list order; each
/// matches at most once per hunk.
pub fn matches_for_hunk<'a>(accepts: &[&'a AcceptLogLine], added: &str) -> Vec<HunkMatch<'a>> {
    let mut matches = Vec::new();
    for &accept in accepts {
        let span = STRATEGIES
            .iter()
            .find_map(|(name, strategy)| strategy(added, &accept.text).map(|span| (*name, span)));
        match span {
            Some((strategy, (start, end))) => {
                debug!(file = %accept.file_name, strategy, start, end, "matched accepted suggestion");
                matches.push(HunkMatch {
                    accept,
                    start,
                    end,
                });
            }
            None => {
                debug!(file = %accept.file_name, "no span recovered; suggestion was rewritten");
            }
        }
    }
    matches
}

fn exact_match(added: &str, target: &str) -> Option<Span> {
    added.find(target).map(|start| (start, start + target.len()))
}

fn common_substring_match(added: &str, target: &str) -> Option<Span> {
    let common = longest_common_substring(added, target);
    if common.len() < MIN_COMMON_LEN {
        return None;
    }
    added.find(common).map(|start| (start, start + common.len()))
}

/// Longest common contiguous substring of `a` and `b`, returned as a slice
/// of `a`.
///
/// Classic dynamic program over byte pairs with two rolling rows:
/// O(|a| * |b|) time, O(|b|) space. Ties resolve to the earliest start in
/// `a`. The byte-level scan can land inside a multi-byte UTF-8 sequence,
/// so the winning span is shrunk to character boundaries before slicing.
pub fn longest_common_substring<'a>(a: &'a str, b: &str) -> &'a str {
    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();
    let mut prev = vec![0usize; b_bytes.len() + 1];
    let mut curr = vec![0usize; b_bytes.len() + 1];
    let mut best_len = 0usize;
    let mut best_end = 0usize;

    for (i, &ab) in a_bytes.iter().enumerate() {
        for (j, &bb) in b_bytes.iter().enumerate() {
            if ab == bb {
                curr[j + 1] = prev[j] + 1;
                if curr[j + 1] > best_len {
                    best_len = curr[j + 1];
                    best_end = i + 1;
                }
            } else {
                curr[j + 1] = 0;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    let mut start = best_end - best_len;
    let mut end = best_end;
    while start < end && !a.is_char_boundary(start) {
        start += 1;
    }
    while end > start && !a.is_char_boundary(end) {
        end -= 1;
    }
    &a[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accept(text: &str) -> AcceptLogLine {
        AcceptLogLine {
            file_name: "a.js".to_string(),
            text: text.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_exact_match_span() {
        let added = "let x = 1;\nfoo(){\n  return 1;\n}\nlet y = 2;";
        let target = accept("foo(){\n  return 1;\n}");
        let matches = matches_for_hunk(&[&target], added);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].start, 11);
        assert_eq!(matches[0].end, 11 + target.text.len());
    }

    #[test]
    fn test_exact_match_takes_precedence_over_fuzzy() {
        // The suggestion occurs verbatim late in the blob, while an even
        // longer common-substring candidate sits at the front. Exact wins.
        let exact = "abcdefghijklmnopqrstuvwxyz";
        let added = format!("{}0123456789{}", &exact[..exact.len() - 1], exact);
        let target = accept(exact);
        let matches = matches_for_hunk(&[&target], &added);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].start, added.find(exact).unwrap());
        assert_eq!(matches[0].end, matches[0].start + exact.len());
    }

    #[test]
    fn test_fuzzy_match_at_threshold_is_accepted() {
        let common = "abcdefghijklmnopqrst"; // exactly 20 bytes
        let added = format!("zz {} zz", common);
        let target = accept(&format!("QQ{}QQ", common));
        let matches = matches_for_hunk(&[&target], &added);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].start, 3);
        assert_eq!(matches[0].end, 3 + common.len());
        // Provenance keeps the full original suggestion text.
        assert_eq!(matches[0].accept.text, format!("QQ{}QQ", common));
    }

    #[test]
    fn test_fuzzy_match_below_threshold_is_rejected() {
        let common = "abcdefghijklmnopqrs"; // 19 bytes
        let added = format!("zz {} zz", common);
        let target = accept(&format!("QQ{}QQ", common));
        assert!(matches_for_hunk(&[&target], &added).is_empty());
    }

    #[test]
    fn test_no_spurious_matches() {
        let added = "const answer = compute(left, right);";
        let target = accept("fn totally_unrelated() -> io::Result<()> { Ok(()) }");
        assert!(matches_for_hunk(&[&target], added).is_empty());
    }

    #[test]
    fn test_each_suggestion_matches_at_most_once() {
        let added = "foo();\nfoo();\n";
        let target = accept("foo();");
        let matches = matches_for_hunk(&[&target], added);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].start, 0);
    }

    #[test]
    fn test_longest_common_substring() {
        assert_eq!(longest_common_substring("xxabcyy", "zzabcww"), "abc");
        assert_eq!(longest_common_substring("abc", "xyz"), "");
        assert_eq!(longest_common_substring("", "abc"), "");
        // Ties resolve to the earliest occurrence in the first argument.
        assert_eq!(longest_common_substring("ab_cd", "cd ab"), "ab");
    }

    #[test]
    fn test_longest_common_substring_multibyte() {
        let got = longest_common_substring("héllo wörld", "wörld again");
        assert_eq!(got, "wörld");
    }
}
