use std::collections::HashSet;
use std::io::BufRead;
use std::path::Path;

use crate::input::{InputError, open_maybe_gz};

/// Box design table: one row per box, columns named by the header.
/// Row order is the box index.
#[derive(Debug, Clone)]
pub struct BoxTable {
    columns: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl BoxTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self, InputError> {
        let mut seen = HashSet::new();
        for name in &columns {
            if !seen.insert(name.as_str()) {
                return Err(InputError::DuplicateColumn(name.clone()));
            }
        }
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(InputError::RowWidth {
                    row: idx,
                    expected: columns.len(),
                    found: row.len(),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    pub fn n_boxes(&self) -> usize {
        self.rows.len()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_index(&self, name: &str) -> Result<usize, InputError> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| InputError::MissingColumn(name.to_string()))
    }

    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.rows[row][col]
    }

    pub fn column_values(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(move |row| row[col])
    }

    pub fn column_mean(&self, col: usize) -> Option<f64> {
        if self.rows.is_empty() {
            return None;
        }
        let sum: f64 = self.column_values(col).sum();
        Some(sum / self.rows.len() as f64)
    }
}

pub fn load_box_table(path: &Path) -> Result<BoxTable, InputError> {
    let reader = open_maybe_gz(path)?;
    let table = parse_box_table(reader, path)?;
    tracing::info!(
        "loaded box table {}: {} boxes x {} columns",
        path.display(),
        table.n_boxes(),
        table.columns().len()
    );
    Ok(table)
}

pub fn parse_box_table<R: BufRead>(mut reader: R, path: &Path) -> Result<BoxTable, InputError> {
    let mut buf = String::new();
    let mut line_no = 0usize;
    let mut columns: Option<Vec<String>> = None;
    let mut rows = Vec::new();

    loop {
        buf.clear();
        let read = reader
            .read_line(&mut buf)
            .map_err(|e| InputError::io(path, e))?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim();
        if line.is_empty() {
            continue;
        }

        if columns.is_none() {
            // The header may itself be commented out.
            let names: Vec<String> = line
                .trim_start_matches('#')
                .split_whitespace()
                .map(str::to_string)
                .collect();
            if !names.is_empty() {
                columns = Some(names);
            }
            continue;
        }
        let n_columns = columns.as_ref().map_or(0, Vec::len);

        let data = match line.find('#') {
            Some(pos) => line[..pos].trim_end(),
            None => line,
        };
        if data.is_empty() {
            continue;
        }

        let mut row = Vec::with_capacity(n_columns);
        for (col, token) in data.split_whitespace().enumerate() {
            let value = token.parse::<f64>().map_err(|_| InputError::Parse {
                line: line_no,
                column: col + 1,
                token: token.to_string(),
            })?;
            row.push(value);
        }
        if row.len() != n_columns {
            return Err(InputError::Shape {
                line: line_no,
                expected: n_columns,
                found: row.len(),
            });
        }
        rows.push(row);
    }

    let columns = columns.ok_or_else(|| InputError::Empty(path.display().to_string()))?;
    BoxTable::new(columns, rows)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/table.rs"]
mod tests;
