// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::data_types::{Worksheet, SANDWICH_TYPES};

/// Why a line of operator input was rejected. Recovered by re-prompting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Exactly {expected} values required, you provided {0}", expected = SANDWICH_TYPES)]
    WrongCount(usize),

    #[error("'{0}' is not a whole number")]
    NotInteger(String),
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("input closed before valid sales data was entered")]
    Closed,

    #[error("console i/o failed: {0}")]
    Io(#[from] io::Error),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read credentials from {}: {source}", .path.display())]
    Credentials {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid service account key: {0}")]
    InvalidKey(#[from] serde_json::Error),

    #[error("authorization failed: {0}")]
    Auth(String),

    #[error("spreadsheet '{0}' not found or not shared with the service account")]
    SpreadsheetNotFound(String),

    #[error("drive request failed: {0}")]
    Drive(#[from] reqwest::Error),

    #[error("sheets request failed: {0}")]
    Sheets(#[from] google_sheets4::Error),
}

#[derive(Error, Debug)]
pub enum DataError {
    #[error("{worksheet} worksheet has no data rows")]
    InsufficientData { worksheet: Worksheet },

    #[error("{worksheet} worksheet row {line}: expected {expected} columns, found {found}", expected = SANDWICH_TYPES)]
    ColumnCount {
        worksheet: Worksheet,
        line: usize,
        found: usize,
    },

    #[error("{worksheet} worksheet column {column}: value out of range")]
    Overflow { worksheet: Worksheet, column: usize },

    #[error("{worksheet} worksheet row {line}: '{value}' is not a whole number")]
    NotInteger {
        worksheet: Worksheet,
        line: usize,
        value: String,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error("console i/o failed: {0}")]
    Console(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
