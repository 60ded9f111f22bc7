//! Summary row output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::HarnessError;
use crate::stats::Summary;

/// Header line of every summary CSV file.
pub const CSV_HEADER: &str = "n,t_mean,t_stdev,t_Q0,t_Q1,t_Q2,t_Q3,t_Q4";

/// Statistics for one swept input size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryRow {
    pub n: u64,
    pub summary: Summary,
}

impl SummaryRow {
    #[must_use]
    pub fn new(n: u64, summary: Summary) -> Self {
        Self { n, summary }
    }

    /// CSV record without the trailing newline.
    #[must_use]
    pub fn to_csv(&self) -> String {
        let Summary {
            mean,
            stdev,
            quartiles: [q0, q1, q2, q3, q4],
        } = self.summary;
        format!("{},{mean},{stdev},{q0},{q1},{q2},{q3},{q4}", self.n)
    }
}

/// Destination for summary rows, owned by the runner for one run.
pub trait SummarySink {
    /// Write one row. Rows are durable once this returns.
    fn write_row(&mut self, row: &SummaryRow) -> Result<(), HarnessError>;

    /// Flush and close.
    fn finish(&mut self) -> Result<(), HarnessError> {
        Ok(())
    }
}

/// In-memory sink, used by tests and by callers that post-process rows.
impl SummarySink for Vec<SummaryRow> {
    fn write_row(&mut self, row: &SummaryRow) -> Result<(), HarnessError> {
        self.push(*row);
        Ok(())
    }
}

/// Writes rows as CSV, flushing after every row.
pub struct CsvSink<W: Write> {
    writer: W,
    label: String,
}

impl<W: Write> CsvSink<W> {
    /// Wrap `writer` and emit the header. `label` names the destination in
    /// error messages.
    pub fn new(mut writer: W, label: impl Into<String>) -> Result<Self, HarnessError> {
        let label = label.into();
        writeln!(writer, "{CSV_HEADER}")
            .and_then(|()| writer.flush())
            .map_err(|e| HarnessError::io(&label, e))?;
        Ok(Self { writer, label })
    }

    /// Consume the sink and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl CsvSink<BufWriter<File>> {
    /// Create or truncate `path`, creating missing parent directories.
    pub fn create(path: &Path) -> Result<Self, HarnessError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| HarnessError::io(parent, e))?;
        }
        let file = File::create(path).map_err(|e| HarnessError::io(path, e))?;
        Self::new(BufWriter::new(file), path.display().to_string())
    }
}

/// Read back a summary file written by [`CsvSink`].
///
/// Blank lines are skipped. Any other line that does not hold a size and
/// seven numbers fails with [`HarnessError::InvalidCsv`].
pub fn read_rows(path: &Path) -> Result<Vec<SummaryRow>, HarnessError> {
    let text = std::fs::read_to_string(path).map_err(|e| HarnessError::io(path, e))?;
    let malformed = |line: usize, reason: String| HarnessError::InvalidCsv {
        path: path.to_path_buf(),
        line,
        reason,
    };

    let mut lines = text.lines().enumerate();
    match lines.next() {
        Some((_, header)) if header.trim() == CSV_HEADER => {}
        Some((_, header)) => return Err(malformed(1, format!("unexpected header {header:?}"))),
        None => return Err(malformed(1, "empty file".into())),
    }

    let mut rows = Vec::new();
    for (index, line) in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let row = parse_row(line).map_err(|reason| malformed(index + 1, reason))?;
        rows.push(row);
    }
    Ok(rows)
}

fn parse_row(line: &str) -> Result<SummaryRow, String> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [n, rest @ ..] = fields.as_slice() else {
        return Err("empty record".into());
    };
    if rest.len() != 7 {
        return Err(format!("expected 8 fields, found {}", fields.len()));
    }
    let n: u64 = n.parse().map_err(|_| format!("invalid size {n:?}"))?;
    let mut values = [0.0_f64; 7];
    for (slot, field) in values.iter_mut().zip(rest) {
        *slot = field
            .parse()
            .map_err(|_| format!("invalid number {field:?}"))?;
    }
    let [mean, stdev, q0, q1, q2, q3, q4] = values;
    Ok(SummaryRow::new(
        n,
        Summary {
            mean,
            stdev,
            quartiles: [q0, q1, q2, q3, q4],
        },
    ))
}

impl<W: Write> SummarySink for CsvSink<W> {
    fn write_row(&mut self, row: &SummaryRow) -> Result<(), HarnessError> {
        writeln!(self.writer, "{}", row.to_csv())
            .and_then(|()| self.writer.flush())
            .map_err(|e| HarnessError::io(&self.label, e))
    }

    fn finish(&mut self) -> Result<(), HarnessError> {
        self.writer
            .flush()
            .map_err(|e| HarnessError::io(&self.label, e))
    }
}
