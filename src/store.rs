// src/store.rs
use std::io::Write;

use async_trait::async_trait;
use tracing::debug;

use crate::data_types::{Row, TableData, Worksheet};
use crate::error::{self, StoreError};
use crate::ui;

/// Append-only access to the three worksheets of the spreadsheet.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorksheetStore: Send + Sync {
    /// Every value on the worksheet, header row included.
    async fn all_values(&self, worksheet: Worksheet) -> Result<TableData, StoreError>;

    /// Adds `row` below the last row of the worksheet.
    async fn append_row(&self, worksheet: Worksheet, row: &Row) -> Result<(), StoreError>;
}

/// Appends `row` to `worksheet`, reporting progress on `out`.
pub async fn update_worksheet<S, W>(
    store: &S,
    out: &mut W,
    worksheet: Worksheet,
    row: &Row,
) -> error::Result<()>
where
    S: WorksheetStore + ?Sized,
    W: Write + ?Sized,
{
    writeln!(out, "{}", ui::updating(worksheet))?;
    debug!(%worksheet, %row, "appending row");
    store.append_row(worksheet, row).await?;
    writeln!(out, "{}", ui::updated(worksheet))?;
    Ok(())
}
