use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use thiserror::Error;

pub mod table;

pub use table::{BoxTable, load_box_table};

pub const DEFAULT_INPUT: &str = "./LH_np7_n25_s555.dat";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("box table {0} has no header row")]
    Empty(String),
    #[error("parse error at line {line}, column {column}: {token:?} is not a number")]
    Parse {
        line: usize,
        column: usize,
        token: String,
    },
    #[error("line {line} has {found} values but the header names {expected} columns")]
    Shape {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("row {row} has {found} values but the table has {expected} columns")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("duplicate column {0:?} in box table header")]
    DuplicateColumn(String),
    #[error("box table has no column {0:?}")]
    MissingColumn(String),
}

impl InputError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        InputError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path).map_err(|e| InputError::io(path, e))?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}
