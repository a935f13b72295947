use crate::domain::points::Points;
use crate::domain::scoring::Rule;
use crate::error::Result;
use std::io::Write;

/// Writes scored receipts as CSV.
///
/// Each row carries the receipt's position in its source and its total. With
/// `explain` enabled, one column per rule precedes the total.
pub struct PointsWriter<W: Write> {
    writer: csv::Writer<W>,
    explain: bool,
}

impl<W: Write> PointsWriter<W> {
    /// Creates the writer and emits the header row.
    pub fn new(sink: W, explain: bool) -> Result<Self> {
        let mut writer = csv::Writer::from_writer(sink);

        let mut header = vec!["receipt"];
        if explain {
            header.extend(Rule::ALL.iter().map(|rule| rule.name()));
        }
        header.push("points");
        writer.write_record(&header)?;

        Ok(Self { writer, explain })
    }

    /// Writes one receipt's row from its per-rule contributions.
    pub fn write_breakdown(&mut self, receipt: usize, breakdown: &[(Rule, Points)]) -> Result<()> {
        let mut record = vec![receipt.to_string()];
        if self.explain {
            record.extend(breakdown.iter().map(|(_, points)| points.to_string()));
        }
        let total: Points = breakdown.iter().map(|(_, points)| *points).sum();
        record.push(total.to_string());

        self.writer.write_record(&record)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
