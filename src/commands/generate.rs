//! Generate command handler - correlate a unified diff with the accept log
//!
//! Reads git diff output and the accept log, finds where each accepted
//! suggestion ended up in the new version of each file, and streams one
//! JSON array of [`BlaimLine`] records per diff file that had at least one
//! match. Files are processed strictly in the order the diff yields them;
//! all per-file state is discarded after serialization.

use std::fs;
use std::io::{Read, Write};

use unidiff::PatchSet;

use crate::acceptlog::read_accept_log;
use crate::cli::GenerateArgs;
use crate::commands::CommandContext;
use crate::error::{BlaimError, Result};
use crate::hunk::{additions, hunk_body, strip_git_prefix};
use crate::matching::matches_for_hunk;
use crate::position::{offset_to_position, to_file_line};
use crate::schema::{AcceptLogLine, BlaimLine, Position, Range};

/// Run the generate command: diff on stdin, records to stdout.
pub fn run_generate(args: &GenerateArgs, ctx: &CommandContext) -> Result<()> {
    let log_file = fs::File::open(&args.accept_log).map_err(|e| BlaimError::FileNotFound {
        path: format!("{}: {}", args.accept_log.display(), e),
    })?;

    let mut diff_text = String::new();
    std::io::stdin().read_to_string(&mut diff_text)?;

    let stdout = std::io::stdout();
    generate(&diff_text, log_file, stdout.lock(), ctx)
}

/// Correlate `diff_text` with the accept log and write the `.blaim` stream:
/// a sequence of independently encoded JSON arrays, one per file with
/// matches. The downstream reader decodes one array at a time until end of
/// input, so the arrays are deliberately not combined.
pub fn generate<R: Read, W: Write>(
    diff_text: &str,
    accept_log: R,
    mut out: W,
    ctx: &CommandContext,
) -> Result<()> {
    let accepts_for_file = read_accept_log(accept_log)?;

    let mut patch = PatchSet::new();
    patch
        .parse(diff_text)
        .map_err(|e| BlaimError::DiffParse {
            message: e.to_string(),
        })?;

    for file in patch {
        let orig_name = strip_git_prefix(&file.source_file).to_string();
        let new_name = strip_git_prefix(&file.target_file).to_string();

        // When the file was renamed in this diff, suggestions logged under
        // either name are eligible to match its hunks.
        let mut accepts: Vec<&AcceptLogLine> = Vec::new();
        if let Some(list) = accepts_for_file.get(&orig_name) {
            accepts.extend(list.iter());
        }
        if new_name != orig_name {
            if let Some(list) = accepts_for_file.get(&new_name) {
                accepts.extend(list.iter());
            }
        }

        let mut blaim_lines: Vec<BlaimLine> = Vec::new();
        for hunk in file {
            let target_start = hunk.target_start;
            let body = hunk_body(hunk);
            let added = additions(&body);
            let Some(start_offset) = added.start_offset else {
                continue;
            };

            for m in matches_for_hunk(&accepts, &added.text) {
                let start = offset_to_position(&added.text, m.start);
                let end = offset_to_position(&added.text, m.end);
                blaim_lines.push(BlaimLine {
                    file_name: m.accept.file_name.clone(),
                    range: Range {
                        start: Position {
                            line: to_file_line(start.line, start_offset, target_start),
                            character: start.character,
                        },
                        end: Position {
                            line: to_file_line(end.line, start_offset, target_start),
                            character: end.character,
                        },
                    },
                    text: m.accept.text.clone(),
                    inference_config: m.accept.inference_config.clone(),
                });
            }
        }

        if ctx.verbose {
            eprintln!("{}: {} match(es)", new_name, blaim_lines.len());
        }
        // Files with zero matches produce no artifact at all.
        if blaim_lines.is_empty() {
            continue;
        }

        serde_json::to_writer_pretty(&mut out, &blaim_lines).map_err(|e| BlaimError::Encode {
            message: e.to_string(),
        })?;
        out.write_all(b"\n")?;
    }
    Ok(())
}
