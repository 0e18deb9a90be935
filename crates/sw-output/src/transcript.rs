//! Transcript file output.
//!
//! The transcript is line-oriented UTF-8 text: one line per acting turn,
//! each line terminated by `\n`.

use std::io::Write;
use std::path::Path;

use crate::OutputResult;

/// Write transcript lines to any sink, one `\n`-terminated line each.
pub fn write_transcript<W: Write>(mut sink: W, lines: &[String]) -> OutputResult<()> {
    for line in lines {
        writeln!(sink, "{line}")?;
    }
    sink.flush()?;
    Ok(())
}

/// Write the transcript to `schedule.txt` inside `dir`.
pub fn write_transcript_file(dir: &Path, lines: &[String]) -> OutputResult<()> {
    let file = std::fs::File::create(dir.join("schedule.txt"))?;
    write_transcript(std::io::BufWriter::new(file), lines)
}
