//! Accept-log parsing
//!
//! The editor extension appends one JSON record per accepted suggestion to
//! an output channel, so each log line looks like
//! `2024-05-31 14:14:17.804 [info] {"fileName":...}`. Everything before the
//! closing `] ` marker is channel framing we skip over.

use std::collections::HashMap;
use std::io::Read;

use crate::error::{BlaimError, Result};
use crate::schema::AcceptLogLine;

/// Marker separating the log-channel framing from the JSON payload.
const JSON_MARKER: &str = "] ";

/// Parse one line of the accept log.
///
/// Returns `Ok(None)` when the line has no JSON marker: the log stream
/// interleaves unrelated output, so such lines are noise rather than
/// errors. Malformed JSON after the marker is a real error and aborts the
/// whole log-processing pass.
pub fn parse_log_line(log_line: &str) -> Result<Option<AcceptLogLine>> {
    let Some(json_start) = log_line.find(JSON_MARKER) else {
        return Ok(None);
    };
    let json_text = &log_line[json_start + JSON_MARKER.len()..];
    let parsed = serde_json::from_str(json_text).map_err(|e| BlaimError::AcceptLogParse {
        message: format!("{} in {:?}", e, log_line),
    })?;
    Ok(Some(parsed))
}

/// Read a whole accept-log stream and group the records by file name,
/// preserving log order within each file.
pub fn read_accept_log<R: Read>(mut input: R) -> Result<HashMap<String, Vec<AcceptLogLine>>> {
    let mut contents = String::new();
    input.read_to_string(&mut contents)?;

    let mut by_file: HashMap<String, Vec<AcceptLogLine>> = HashMap::new();
    for line in contents.lines() {
        if let Some(parsed) = parse_log_line(line)? {
            by_file
                .entry(parsed.file_name.clone())
                .or_default()
                .push(parsed);
        }
    }
    Ok(by_file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Position;

    const SAMPLE_LINE: &str = r#"2024-05-31 14:14:17.804 [info] {"fileName":"inline-completions/playground.js","position":{"line":20,"character":9},"text":"foo(){\n  return \"bar\";\n}","headGitCommit":{"type":0,"name":"logaccepts","commit":"f0d3f3eea79cff732255067ba85588a2bbc4d7c3","ahead":0,"behind":0},"inferenceConfig":{"endpoint":"http://127.0.0.1:11434","bearerToken":"","maxLines":16,"maxTokens":256,"temperature":0.2,"modelName":"stable-code:3b-code-q4_0","modelFormat":"stable-code","delay":250}}"#;

    #[test]
    fn test_parse_log_line() {
        let parsed = parse_log_line(SAMPLE_LINE).unwrap().unwrap();
        assert_eq!(parsed.file_name, "inline-completions/playground.js");
        assert_eq!(
            parsed.position,
            Position {
                line: 20,
                character: 9
            }
        );
        assert_eq!(parsed.text, "foo(){\n  return \"bar\";\n}");
        assert_eq!(parsed.head_git_commit.name, "logaccepts");
        assert_eq!(parsed.inference_config.max_lines, 16);
        assert_eq!(parsed.inference_config.model_name, "stable-code:3b-code-q4_0");
        assert_eq!(parsed.inference_config.delay, 250);
    }

    #[test]
    fn test_parse_log_line_without_marker_is_noise() {
        assert_eq!(parse_log_line("").unwrap(), None);
        assert_eq!(
            parse_log_line("2024-05-31 14:18:00.000 restarting completion server").unwrap(),
            None
        );
    }

    #[test]
    fn test_parse_log_line_bad_json_is_an_error() {
        let err = parse_log_line("2024-05-31 [info] {not json").unwrap_err();
        assert!(matches!(err, BlaimError::AcceptLogParse { .. }));
    }

    #[test]
    fn test_read_accept_log_groups_by_file_in_order() {
        let log = concat!(
            r#"a [info] {"fileName":"a.js","text":"first"}"#,
            "\n",
            "noise without marker\n",
            r#"b [info] {"fileName":"b.js","text":"other"}"#,
            "\n",
            r#"c [info] {"fileName":"a.js","text":"second"}"#,
            "\n",
        );
        let by_file = read_accept_log(log.as_bytes()).unwrap();
        assert_eq!(by_file.len(), 2);
        let a = &by_file["a.js"];
        assert_eq!(a.len(), 2);
        assert_eq!(a[0].text, "first");
        assert_eq!(a[1].text, "second");
        assert_eq!(by_file["b.js"].len(), 1);
    }

    #[test]
    fn test_read_accept_log_fails_fast_on_bad_entry() {
        let log = concat!(
            r#"a [info] {"fileName":"a.js","text":"ok"}"#,
            "\n",
            "b [info] {broken\n",
        );
        assert!(read_accept_log(log.as_bytes()).is_err());
    }
}
