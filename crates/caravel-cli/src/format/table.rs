//! ASCII table rendering for formatter output.

use std::fmt;

use unicode_width::UnicodeWidthStr;

/// An ordered set of columns plus zero or more rows.
///
/// Cells may contain newlines; multi-line cells render as multiple physical
/// lines within the same logical row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Width of each column: widest line among header and all cells
    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.width()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                for line in cell.split('\n') {
                    if line.width() > widths[i] {
                        widths[i] = line.width();
                    }
                }
            }
        }
        widths
    }
}

fn write_separator(f: &mut fmt::Formatter<'_>, widths: &[usize]) -> fmt::Result {
    for width in widths {
        write!(f, "+{}", "-".repeat(width + 2))?;
    }
    writeln!(f, "+")
}

fn write_line(f: &mut fmt::Formatter<'_>, widths: &[usize], cells: &[&str]) -> fmt::Result {
    for (width, cell) in widths.iter().zip(cells) {
        // Pad by display width, not char count
        let padding = width.saturating_sub(cell.width());
        write!(f, "| {}{} ", cell, " ".repeat(padding))?;
    }
    writeln!(f, "|")
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();

        write_separator(f, &widths)?;
        let header: Vec<&str> = self.columns.iter().map(String::as_str).collect();
        write_line(f, &widths, &header)?;
        write_separator(f, &widths)?;

        for row in &self.rows {
            let cells: Vec<Vec<&str>> = row.iter().map(|c| c.split('\n').collect()).collect();
            let height = cells.iter().map(Vec::len).max().unwrap_or(1);
            for line_idx in 0..height {
                let line: Vec<&str> = cells
                    .iter()
                    .map(|lines| lines.get(line_idx).copied().unwrap_or(""))
                    .collect();
                write_line(f, &widths, &line)?;
            }
        }

        if !self.rows.is_empty() {
            write_separator(f, &widths)?;
        }

        Ok(())
    }
}
