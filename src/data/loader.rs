// ============================================================
// Layer 4 — Spreadsheet Loader
// ============================================================
// Reads one named column of messages out of a worksheet using
// the calamine crate (xlsx / xlsm / xls / ods).
//
// Row selection mirrors the analyst's original export settings:
//
//   row 0 ┐
//   ...   ├─ skip_rows      (title block, notes, blank lines)
//   row 7 ┘
//   row 8    header row     ← column is found here by exact name
//   row 9 ┐
//   ...   ├─ data rows
//   ...   ┘
//   last 5   skip_footer    (totals, signatures)
//
// Rows are counted from the absolute top of the sheet, so blank
// leading rows count toward skip_rows.
//
// Within the column, empty and #ERROR cells are dropped, values
// are converted to text and stripped, and cells that strip down
// to nothing are dropped too.
//
// Reference: calamine crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{anyhow, bail, Context, Result};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::PathBuf;

use crate::domain::message::Message;
use crate::domain::traits::MessageSource;

/// A worksheet as rows of optional cell text, anchored at A1
pub type Grid = Vec<Vec<Option<String>>>;

/// Loads one column of a spreadsheet as messages.
/// Implements the MessageSource trait from Layer 3.
pub struct SpreadsheetLoader {
    path: PathBuf,
    column: String,
    skip_rows: usize,
    skip_footer: usize,
    /// Worksheet name; the first sheet when None
    sheet: Option<String>,
}

impl SpreadsheetLoader {
    pub fn new(path: impl Into<PathBuf>, column: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            column: column.into(),
            skip_rows: 0,
            skip_footer: 0,
            sheet: None,
        }
    }

    pub fn with_skip_rows(mut self, n: usize) -> Self {
        self.skip_rows = n;
        self
    }

    pub fn with_skip_footer(mut self, n: usize) -> Self {
        self.skip_footer = n;
        self
    }

    pub fn with_sheet(mut self, sheet: Option<String>) -> Self {
        self.sheet = sheet;
        self
    }

    /// Open the workbook and read the chosen sheet into a Grid
    fn read_grid(&self) -> Result<Grid> {
        let mut workbook = open_workbook_auto(&self.path)
            .with_context(|| format!("Cannot open spreadsheet '{}'", self.path.display()))?;

        let sheet = match &self.sheet {
            Some(name) => name.clone(),
            None => workbook
                .sheet_names()
                .first()
                .cloned()
                .ok_or_else(|| anyhow!("'{}' contains no worksheets", self.path.display()))?,
        };

        let range = workbook
            .worksheet_range(&sheet)
            .with_context(|| format!("Cannot read sheet '{}' of '{}'", sheet, self.path.display()))?;

        tracing::debug!("Read sheet '{}' ({} rows in used range)", sheet, range.height());
        Ok(range_to_grid(&range))
    }
}

impl MessageSource for SpreadsheetLoader {
    fn load_all(&self) -> Result<Vec<Message>> {
        let grid = self.read_grid()?;
        let messages = select_column(&grid, self.skip_rows, self.skip_footer, &self.column)?;

        if messages.is_empty() {
            tracing::warn!(
                "Column '{}' in '{}' has no usable messages",
                self.column,
                self.path.display()
            );
        } else {
            tracing::info!(
                "Loaded {} messages from column '{}'",
                messages.len(),
                self.column
            );
        }
        Ok(messages)
    }
}

/// Re-anchor a calamine Range at A1. The used range starts at the
/// first non-empty cell, so leading blank rows/columns are padded
/// back in.
fn range_to_grid(range: &Range<Data>) -> Grid {
    let Some((row0, col0)) = range.start() else {
        return Vec::new();
    };

    let mut grid: Grid = vec![Vec::new(); row0 as usize];
    for row in range.rows() {
        let mut cells: Vec<Option<String>> = vec![None; col0 as usize];
        cells.extend(row.iter().map(cell_text));
        grid.push(cells);
    }
    grid
}

/// Text of one cell; None for empty and error cells
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => Some(s.clone()),
        Data::Float(f) => Some(format_float(*f)),
        Data::Int(i) => Some(i.to_string()),
        Data::Bool(b) => Some(if *b { "True" } else { "False" }.to_string()),
        Data::DateTime(dt) if dt.is_duration() => Some(format_float(dt.as_f64())),
        Data::DateTime(dt) => Some(format_excel_serial(dt.as_f64())),
        Data::DateTimeIso(s) => Some(format_iso_datetime(s)),
        Data::DurationIso(s) => Some(s.clone()),
    }
}

/// Excel serial date (days since 1899-12-30) as
/// "YYYY-MM-DD HH:MM:SS", rounded to the second.
fn format_excel_serial(serial: f64) -> String {
    let mut days = serial.floor() as i64;
    let mut secs = ((serial - serial.floor()) * 86_400.0).round() as i64;
    if secs >= 86_400 {
        days += 1;
        secs -= 86_400;
    }
    let (y, m, d) = civil_from_days(days - 25_569);
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
        y,
        m,
        d,
        secs / 3600,
        secs % 3600 / 60,
        secs % 60
    )
}

/// Days since 1970-01-01 to (year, month, day) in the proleptic
/// Gregorian calendar.
///
/// Reference: H. Hinnant, "chrono-Compatible Low-Level Date Algorithms"
fn civil_from_days(z: i64) -> (i64, i64, i64) {
    let z = z + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = yoe + era * 400 + i64::from(m <= 2);
    (y, m, d)
}

/// ODS dates arrive as ISO text: "2018-08-16T12:00:00" or "2018-08-16"
fn format_iso_datetime(s: &str) -> String {
    let mut out = s.replacen('T', " ", 1);
    if out.len() == 10 {
        out.push_str(" 00:00:00");
    }
    out
}

/// Whole floats keep a ".0" suffix ("5.0"), as a float
/// column does when it is cast to text.
fn format_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e16 {
        format!("{:.1}", f)
    } else {
        f.to_string()
    }
}

/// Pick `column` out of a grid after skipping `skip_rows` rows
/// above the header and `skip_footer` rows at the bottom.
/// Message rows are reported 1-based.
pub fn select_column(
    grid: &[Vec<Option<String>>],
    skip_rows: usize,
    skip_footer: usize,
    column: &str,
) -> Result<Vec<Message>> {
    if grid.is_empty() {
        tracing::warn!("Worksheet is empty");
        return Ok(Vec::new());
    }

    let Some(header) = grid.get(skip_rows) else {
        bail!(
            "Worksheet has {} rows; no header row left after skipping {}",
            grid.len(),
            skip_rows
        );
    };

    let col = header
        .iter()
        .position(|h| h.as_deref() == Some(column))
        .ok_or_else(|| {
            let available: Vec<&str> = header.iter().flatten().map(String::as_str).collect();
            anyhow!(
                "Column '{}' not found in header row {}; available: [{}]",
                column,
                skip_rows + 1,
                available.join(", ")
            )
        })?;

    let first_data = skip_rows + 1;
    let data_rows = grid.len().saturating_sub(first_data);
    let kept = data_rows.saturating_sub(skip_footer);

    let messages: Vec<Message> = grid
        .iter()
        .enumerate()
        .skip(first_data)
        .take(kept)
        .filter_map(|(r, row)| {
            let text = row.get(col)?.as_deref()?.trim();
            if text.is_empty() {
                tracing::debug!("Row {}: empty cell skipped", r + 1);
                None
            } else {
                Some(Message::new(r + 1, text))
            }
        })
        .collect();

    Ok(messages)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[Option<&str>]) -> Vec<Option<String>> {
        cells.iter().map(|c| c.map(str::to_string)).collect()
    }

    /// 2 junk rows, header, 4 data rows, 1 footer row
    fn grid() -> Grid {
        vec![
            row(&[Some("Report title")]),
            row(&[]),
            row(&[Some("Id"), Some("Message")]),
            row(&[Some("1"), Some("  need boat  ")]),
            row(&[Some("2"), None]),
            row(&[Some("3"), Some("   ")]),
            row(&[Some("4"), Some("A***B trapped")]),
            row(&[Some("Total"), Some("footer text")]),
        ]
    }

    #[test]
    fn test_selects_strips_and_drops_empty() {
        let msgs = select_column(&grid(), 2, 1, "Message").unwrap();
        assert_eq!(
            msgs,
            vec![Message::new(4, "need boat"), Message::new(7, "A***B trapped")]
        );
    }

    #[test]
    fn test_without_footer_skip_footer_row_is_kept() {
        let msgs = select_column(&grid(), 2, 0, "Message").unwrap();
        assert_eq!(msgs.len(), 3);
        assert_eq!(msgs[2].text, "footer text");
    }

    #[test]
    fn test_missing_column_lists_headers() {
        let err = select_column(&grid(), 2, 1, "Tweet").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("'Tweet' not found"));
        assert!(msg.contains("Id, Message"));
    }

    #[test]
    fn test_footer_larger_than_data() {
        let msgs = select_column(&grid(), 2, 50, "Message").unwrap();
        assert!(msgs.is_empty());
    }

    #[test]
    fn test_skip_past_end_is_error() {
        assert!(select_column(&grid(), 20, 0, "Message").is_err());
    }

    #[test]
    fn test_empty_grid() {
        assert!(select_column(&[], 8, 5, "Message").unwrap().is_empty());
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&Data::Empty), None);
        assert_eq!(cell_text(&Data::Float(5.0)), Some("5.0".to_string()));
        assert_eq!(cell_text(&Data::Float(2.5)), Some("2.5".to_string()));
        assert_eq!(cell_text(&Data::Int(7)), Some("7".to_string()));
        assert_eq!(cell_text(&Data::Bool(true)), Some("True".to_string()));
    }

    #[test]
    fn test_date_cells_use_datetime_text() {
        assert_eq!(format_excel_serial(43328.5), "2018-08-16 12:00:00");
        assert_eq!(format_excel_serial(43328.0), "2018-08-16 00:00:00");
        assert_eq!(format_excel_serial(25569.0), "1970-01-01 00:00:00");
        assert_eq!(format_excel_serial(43101.999_999_9), "2018-01-02 00:00:00");
        assert_eq!(
            cell_text(&Data::DateTimeIso("2018-08-16T09:30:00".to_string())),
            Some("2018-08-16 09:30:00".to_string())
        );
        assert_eq!(format_iso_datetime("2018-08-17"), "2018-08-17 00:00:00");
    }

    #[test]
    fn test_range_is_reanchored_at_a1() {
        let mut range: Range<Data> = Range::new((2, 1), (3, 2));
        range.set_value((2, 1), Data::String("Message".to_string()));
        range.set_value((3, 1), Data::String("help".to_string()));
        let grid = range_to_grid(&range);
        assert_eq!(grid.len(), 4);
        assert_eq!(grid[2][1].as_deref(), Some("Message"));
        let msgs = select_column(&grid, 2, 0, "Message").unwrap();
        assert_eq!(msgs, vec![Message::new(4, "help")]);
    }

    #[test]
    fn test_missing_file_is_error() {
        let loader = SpreadsheetLoader::new("does/not/exist.xlsx", "Message");
        assert!(loader.load_all().is_err());
    }
}
