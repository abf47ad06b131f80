//! Resolve command: read a timetable, resolve conflicts, write the result.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use timetable_core::{
    SourceTable, TimetableStats, build_timetable, record_lines, write_timetable,
};

use crate::Config;
use crate::cli::ResolveArgs;

/// Runs the resolve command.
///
/// Command-line paths take precedence over configured ones. Without any
/// output path the result goes to stdout.
pub fn run(args: &ResolveArgs, config: &Config, sources: &SourceTable) -> Result<()> {
    let input = args
        .input
        .as_deref()
        .or(config.input_path.as_deref())
        .context("no input file given and no input_path configured")?;

    let content = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read input file {}", input.display()))?;

    args.output
        .as_deref()
        .or(config.output_path.as_deref())
        .map_or_else(
            || write_stdout(&content, sources),
            |path| write_file(path, &content, sources),
        )
}

fn write_file(path: &Path, content: &str, sources: &SourceTable) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create output file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    resolve_to(&mut writer, content, sources)
        .and_then(|_| writer.flush())
        .with_context(|| format!("failed to write output file {}", path.display()))?;
    tracing::debug!(path = %path.display(), "timetable written");
    Ok(())
}

fn write_stdout(content: &str, sources: &SourceTable) -> Result<()> {
    let mut stdout = io::stdout().lock();
    resolve_to(&mut stdout, content, sources)
        .and_then(|_| stdout.flush())
        .context("failed to write timetable to stdout")?;
    Ok(())
}

/// Resolves `content` and writes the grouped timetable to `writer`.
pub fn resolve_to<W: Write>(
    writer: &mut W,
    content: &str,
    sources: &SourceTable,
) -> io::Result<TimetableStats> {
    let timetable = build_timetable(record_lines(content), sources);
    write_timetable(writer, &timetable.store, sources)?;
    Ok(timetable.stats)
}
