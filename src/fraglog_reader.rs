/*!
 * Reads allocator logs and extracts the fragmentation value from marked lines
 */

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{FragLogError, Result};

/// Substring that selects the lines carrying a fragmentation value.
pub const MARKER: &str = "Fragmentation";

/// Default log path written by the allocator.
pub const DEFAULT_LOG_PATH: &str = "malloc_log.txt";

/*
Allocated 100 bytes at 0x55d0c6a4a018
Fragmentation: call #1 ratio 0.0000
Freed 100 bytes
Fragmentation: call #2 ratio 0.3125
*/

/// True if the line carries the fragmentation marker (case-sensitive, anywhere in the line).
pub fn contains_marker(line: &str) -> bool {
    line.contains(MARKER)
}

/// Parse the value of a marked line: the last whitespace-separated field as `f64`.
/// ```
/// use fraglog::fraglog_reader::parse_fragmentation_line;
/// let value = parse_fragmentation_line("Fragmentation: call #3 ratio 0.4285", 1).unwrap();
/// assert_eq!(value, 0.4285);
/// ```
pub fn parse_fragmentation_line(line: &str, line_number: usize) -> Result<f64> {
    let token = line
        .split_whitespace()
        .next_back()
        .ok_or(FragLogError::MissingValue { line_number })?;
    token.parse::<f64>().map_err(|_| FragLogError::Parse {
        line_number,
        line: line.trim_end().to_owned(),
        token: token.to_owned(),
    })
}

/// Lazy scanner over a log, yielding one value per marked line.
///
/// Unmarked lines are skipped without a trace. The first error ends the iteration.
pub struct FragmentationParser {
    reader: Box<dyn BufRead>,
    source: PathBuf,
    buf: String, // reused between lines
    line_number: usize,
    done: bool,
}

impl FragmentationParser {
    /// Open the log at `path`. The file is closed when the parser is dropped.
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| FragLogError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "opened log file");
        Ok(Self::with_source(Box::new(BufReader::new(file)), path.to_path_buf()))
    }

    /// Scan an in-memory log
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self::with_source(Box::new(Cursor::new(bytes)), PathBuf::from("<bytes>"))
    }

    /// Scan anything that implements `BufRead`
    pub fn from_reader<R: BufRead + 'static>(reader: R) -> Self {
        Self::with_source(Box::new(reader), PathBuf::from("<reader>"))
    }

    fn with_source(reader: Box<dyn BufRead>, source: PathBuf) -> Self {
        Self {
            reader,
            source,
            buf: String::new(),
            line_number: 0,
            done: false,
        }
    }

    /// Number of lines consumed so far, matching or not.
    pub fn lines_read(&self) -> usize {
        self.line_number
    }
}

impl Iterator for FragmentationParser {
    type Item = Result<f64>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            self.buf.clear();
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => self.done = true,
                Ok(_) => {
                    self.line_number += 1;
                    if !contains_marker(&self.buf) {
                        continue;
                    }
                    let value = parse_fragmentation_line(&self.buf, self.line_number);
                    self.done = value.is_err();
                    return Some(value);
                }
                Err(source) => {
                    self.done = true;
                    return Some(Err(FragLogError::Read {
                        path: self.source.clone(),
                        line_number: self.line_number + 1,
                        source,
                    }));
                }
            }
        }
        None
    }
}

impl std::iter::FusedIterator for FragmentationParser {}

/// Collect every value from the scanner. Any error discards what was collected.
pub fn scan(parser: FragmentationParser) -> Result<Vec<f64>> {
    parser.collect()
}

/// Scan the log at `path` into its value sequence.
pub fn scan_file(path: &Path) -> Result<Vec<f64>> {
    let values = scan(FragmentationParser::from_file(path)?)?;
    info!(path = %path.display(), count = values.len(), "collected fragmentation values");
    Ok(values)
}

/// Scan an already opened log into its value sequence.
pub fn scan_reader<R: BufRead + 'static>(reader: R) -> Result<Vec<f64>> {
    scan(FragmentationParser::from_reader(reader))
}
