//! Data model shared by the accept log and the `.blaim` artifact
//!
//! Field names follow the fixed external JSON schema written by the editor
//! extension (`fileName`, `position`, `text`, `headGitCommit`,
//! `inferenceConfig`), so renames here would break compatibility with the
//! producing tool.

use serde::{Deserialize, Serialize};

/// A line/character position within a text buffer.
///
/// Lines are 1-based in file-relative ranges. Characters are UTF-8 byte
/// columns, matching the offsets produced by substring search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

/// A span between two positions. `start.line <= end.line` always holds for
/// ranges built by the generation pass; `end` is best-effort under fuzzy
/// matching and consumers should not rely on it (see [`crate::rangeset`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

/// Git branch state recorded by the extension at acceptance time.
/// Carried through parsing but not copied onto [`BlaimLine`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitCommit {
    #[serde(rename = "type")]
    pub commit_type: i32,
    pub name: String,
    pub commit: String,
    pub ahead: i32,
    pub behind: i32,
}

/// Model and inference parameters in effect when a suggestion was produced.
/// Copied verbatim onto every [`BlaimLine`] derived from the suggestion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InferenceConfig {
    pub endpoint: String,
    pub max_lines: u32,
    pub max_tokens: u32,
    pub temperature: f32,
    pub model_name: String,
    pub model_format: String,
    pub delay: u32,
}

/// One accepted AI suggestion, as logged by the editor extension.
///
/// `position` reflects the cursor at acceptance time and is informational
/// only; final placement comes from correlating `text` against the diff.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AcceptLogLine {
    pub file_name: String,
    pub position: Position,
    pub text: String,
    pub head_git_commit: GitCommit,
    pub inference_config: InferenceConfig,
}

/// The persisted unit of attribution: a file-relative range in the new
/// version of a file, the suggestion text that produced it, and the
/// inference metadata it was produced under.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlaimLine {
    pub file_name: String,
    pub range: Range,
    pub text: String,
    pub inference_config: InferenceConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blaim_line_field_names_are_stable() {
        let line = BlaimLine {
            file_name: "a.js".to_string(),
            text: "x".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&line).unwrap();
        assert!(json.contains("\"fileName\""));
        assert!(json.contains("\"range\""));
        assert!(json.contains("\"text\""));
        assert!(json.contains("\"inferenceConfig\""));
        assert!(json.contains("\"modelName\""));
        assert!(json.contains("\"maxLines\""));
    }

    #[test]
    fn test_accept_log_line_tolerates_missing_and_unknown_fields() {
        // bearerToken is written by some extension versions; headGitCommit
        // may be absent entirely.
        let json = r#"{"fileName":"a.js","text":"foo","inferenceConfig":{"bearerToken":"","modelName":"m","temperature":0.5}}"#;
        let parsed: AcceptLogLine = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.file_name, "a.js");
        assert_eq!(parsed.inference_config.model_name, "m");
        assert_eq!(parsed.head_git_commit, GitCommit::default());
    }
}
