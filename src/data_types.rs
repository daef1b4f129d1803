// src/data_types.rs
use std::fmt;
use std::ops::Index;

use serde_json::Value;

use crate::error::DataError;

/// Number of sandwich types tracked; every row carries one column per type.
pub const SANDWICH_TYPES: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Worksheet {
    Sales,
    Surplus,
    Stock,
}

impl Worksheet {
    /// Worksheet title as it appears in the spreadsheet.
    pub fn title(self) -> &'static str {
        match self {
            Worksheet::Sales => "sales",
            Worksheet::Surplus => "surplus",
            Worksheet::Stock => "stock",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Worksheet::Sales => "Sales",
            Worksheet::Surplus => "Surplus",
            Worksheet::Stock => "Stock",
        }
    }
}

impl fmt::Display for Worksheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// One row of figures, one integer per sandwich type.
///
/// Sales, surplus and stock records all share this shape so that column `i`
/// means the same sandwich on every worksheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row([i64; SANDWICH_TYPES]);

impl Row {
    pub fn new(values: [i64; SANDWICH_TYPES]) -> Self {
        Row(values)
    }

    pub fn values(&self) -> &[i64; SANDWICH_TYPES] {
        &self.0
    }

    /// Cell values for a spreadsheet append request.
    pub fn to_cells(&self) -> Vec<Value> {
        self.0.iter().map(|v| Value::from(*v)).collect()
    }

    /// Parses a stored row. `line` is the 1-based sheet row, used in errors.
    pub fn parse_cells(
        worksheet: Worksheet,
        line: usize,
        cells: &[String],
    ) -> Result<Self, DataError> {
        if cells.len() != SANDWICH_TYPES {
            return Err(DataError::ColumnCount {
                worksheet,
                line,
                found: cells.len(),
            });
        }

        let mut values = [0i64; SANDWICH_TYPES];
        for (slot, cell) in values.iter_mut().zip(cells) {
            *slot = cell.trim().parse().map_err(|_| DataError::NotInteger {
                worksheet,
                line,
                value: cell.clone(),
            })?;
        }

        Ok(Row(values))
    }
}

impl Index<usize> for Row {
    type Output = i64;

    fn index(&self, index: usize) -> &i64 {
        &self.0[index]
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self.0.iter().map(i64::to_string).collect();
        f.write_str(&joined.join(","))
    }
}

/// Full content of a worksheet: the header row and the data rows below it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    pub fn empty() -> Self {
        TableData {
            headers: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Builds a table from raw sheet values, first row being the header.
    /// Blank rows are dropped.
    pub fn from_values(values: Vec<Vec<String>>) -> Self {
        let mut values = values.into_iter();
        let headers = match values.next() {
            Some(headers) => headers,
            None => return TableData::empty(),
        };

        let rows = values
            .filter(|row| !row.iter().all(|cell| cell.trim().is_empty()))
            .collect();

        TableData { headers, rows }
    }

    /// Parses every data row into a [`Row`].
    pub fn parse_rows(&self, worksheet: Worksheet) -> Result<Vec<Row>, DataError> {
        self.rows
            .iter()
            .enumerate()
            // data starts on sheet row 2, below the header
            .map(|(i, cells)| Row::parse_cells(worksheet, i + 2, cells))
            .collect()
    }
}
