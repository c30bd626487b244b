//! Result emission - one JSON object per line.

use std::io::Write;

use anyhow::Context;

use pdftext_core::ExtractionResult;

/// Write `result` as a single JSON line and flush.
pub fn write_result<W: Write>(writer: &mut W, result: &ExtractionResult) -> anyhow::Result<()> {
    let json = result.to_json().context("failed to serialize result")?;
    writeln!(writer, "{}", json).context("failed to write result")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}
