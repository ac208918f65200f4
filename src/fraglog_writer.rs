/*!
 * Writes fragmentation records in the allocator's log line format
 */

use std::io::Write;

use crate::fraglog_reader::MARKER;

/// One fragmentation measurement taken after an allocate or free call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FragmentationRecord {
    pub call: u64,
    pub ratio: f64,
}

impl FragmentationRecord {
    pub fn new(call: u64, ratio: f64) -> Self {
        FragmentationRecord { call, ratio }
    }
}

/// Format a record as a log line (no trailing newline).
/// Example: Fragmentation: call #3 ratio 0.4285
pub fn record_to_line(record: &FragmentationRecord) -> String {
    format!("{MARKER}: call #{} ratio {}", record.call, record.ratio)
}

/// Write each record as its own line.
pub fn write_log<W: Write>(writer: &mut W, records: &[FragmentationRecord]) -> std::io::Result<()> {
    for record in records {
        writeln!(writer, "{}", record_to_line(record))?;
    }
    writer.flush()
}
