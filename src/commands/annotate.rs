//! Annotate command handler - line-by-line provenance view of source files
//!
//! Consumes a `.blaim` stream, groups the records by file, and renders each
//! file with a provenance prefix in front of every attributed line. Lines
//! with no attribution get blank padding of the same width so the source
//! text stays column-aligned.

use std::collections::HashMap;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use crate::commands::CommandContext;
use crate::error::{BlaimError, Result};
use crate::rangeset::BlaimRangeSet;
use crate::schema::BlaimLine;

/// Run the annotate command: `.blaim` stream on stdin, annotated text to
/// stdout. File contents are resolved against the checkout root.
pub fn run_annotate(ctx: &CommandContext) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    annotate(stdin.lock(), &ctx.root, stdout.lock(), ctx.verbose)
}

/// Read a `.blaim` stream: repeatedly decode one JSON array of records
/// until end of input, then group the records by file name. A decode
/// failure aborts the pass.
pub fn read_blaim_stream<R: Read>(input: R) -> Result<HashMap<String, Vec<BlaimLine>>> {
    let mut by_file: HashMap<String, Vec<BlaimLine>> = HashMap::new();
    let stream = serde_json::Deserializer::from_reader(input).into_iter::<Vec<BlaimLine>>();
    for batch in stream {
        let batch = batch.map_err(|e| BlaimError::Decode {
            message: e.to_string(),
        })?;
        for record in batch {
            by_file
                .entry(record.file_name.clone())
                .or_default()
                .push(record);
        }
    }
    Ok(by_file)
}

/// Annotate every file mentioned in the `.blaim` stream. Each file's pass
/// is independent and read-only, so the per-file order is whatever the
/// grouping map yields.
pub fn annotate<R: Read, W: Write>(
    blaim_stream: R,
    root: &Path,
    mut out: W,
    verbose: bool,
) -> Result<()> {
    let by_file = read_blaim_stream(blaim_stream)?;

    for (file_name, records) in by_file {
        let path = root.join(&file_name);
        let contents = fs::read_to_string(&path).map_err(|e| BlaimError::FileNotFound {
            path: format!("{}: {}", path.display(), e),
        })?;
        if verbose {
            eprintln!("{}: {} record(s)", file_name, records.len());
        }
        let range_set = BlaimRangeSet::new(records);
        out.write_all(annotate_lines(&contents, &range_set).as_bytes())?;
    }
    Ok(())
}

/// Render one prefixed output line per input line. The first covering
/// record (in index order) decides the prefix for an attributed line.
/// Every prefix, including the blank one for unattributed lines, is padded
/// to the widest prefix in the file so the source text stays left-aligned.
pub fn annotate_lines(contents: &str, range_set: &BlaimRangeSet) -> String {
    let lines: Vec<&str> = contents.split('\n').collect();

    let mut prefixes: Vec<String> = Vec::with_capacity(lines.len());
    let mut widest = 0;
    for line_number in 1..=lines.len() {
        let covering = range_set.for_source_line(line_number);
        let prefix = covering
            .first()
            .map(|record| annotation_prefix(record))
            .unwrap_or_default();
        widest = widest.max(prefix.len());
        prefixes.push(prefix);
    }

    let mut output = String::new();
    for (prefix, line) in prefixes.iter().zip(&lines) {
        output.push_str(&format!("{:<width$}", prefix, width = widest));
        output.push_str(line);
        output.push('\n');
    }
    output
}

/// Provenance tag rendered in front of an attributed line.
fn annotation_prefix(record: &BlaimLine) -> String {
    format!(
        "[{}, temp: {:.1}] ",
        record.inference_config.model_name, record.inference_config.temperature
    )
}
