// src/forecast.rs
use std::io::Write;

use tracing::debug;

use crate::data_types::{Row, Worksheet, SANDWICH_TYPES};
use crate::error::{DataError, Result};
use crate::store::WorksheetStore;
use crate::ui;

/// Number of most recent sales rows averaged by the forecast.
pub const FORECAST_WINDOW: usize = 5;

/// Extra stock on top of the average, as a multiplier.
pub const SAFETY_MARGIN: f64 = 1.1;

/// Stock minus sales per sandwich type.
///
/// Positive values are waste, negative values are sandwiches made to order
/// after the stock ran out.
pub fn surplus(stock: &Row, sales: &Row) -> std::result::Result<Row, DataError> {
    let mut values = [0i64; SANDWICH_TYPES];
    for (i, slot) in values.iter_mut().enumerate() {
        *slot = stock[i]
            .checked_sub(sales[i])
            .ok_or(DataError::Overflow {
                worksheet: Worksheet::Surplus,
                column: i + 1,
            })?;
    }
    Ok(Row::new(values))
}

/// Average of the trailing [`FORECAST_WINDOW`] rows of `history`, plus the
/// safety margin, rounded half to even.
///
/// Uses whatever rows exist when there are fewer than the window.
pub fn forecast_stock(history: &[Row]) -> std::result::Result<Row, DataError> {
    let window = &history[history.len().saturating_sub(FORECAST_WINDOW)..];
    if window.is_empty() {
        return Err(DataError::InsufficientData {
            worksheet: Worksheet::Sales,
        });
    }

    let count = window.len() as f64;
    let mut values = [0i64; SANDWICH_TYPES];
    for (col, slot) in values.iter_mut().enumerate() {
        // at most FORECAST_WINDOW i64 terms, cannot overflow i128
        let total: i128 = window.iter().map(|row| i128::from(row[col])).sum();
        let forecast = (total as f64 / count * SAFETY_MARGIN).round_ties_even();

        // i64::MAX as f64 rounds up to 2^63, itself out of range
        if forecast < i64::MIN as f64 || forecast >= i64::MAX as f64 {
            return Err(DataError::Overflow {
                worksheet: Worksheet::Stock,
                column: col + 1,
            });
        }
        *slot = forecast as i64;
    }

    Ok(Row::new(values))
}

/// Surplus of the last recorded stock row over `sales`.
pub async fn calculate_surplus_data<S, W>(store: &S, out: &mut W, sales: &Row) -> Result<Row>
where
    S: WorksheetStore + ?Sized,
    W: Write + ?Sized,
{
    writeln!(out, "{}", ui::CALCULATING_SURPLUS)?;

    let table = store.all_values(Worksheet::Stock).await?;
    let line = table.rows.len() + 1;
    let last = table.rows.last().ok_or(DataError::InsufficientData {
        worksheet: Worksheet::Stock,
    })?;
    let stock = Row::parse_cells(Worksheet::Stock, line, last)?;

    let result = surplus(&stock, sales)?;
    debug!(%stock, %sales, surplus = %result, "surplus calculated");
    Ok(result)
}

/// Stock forecast from the sales history on the spreadsheet.
pub async fn calculate_stock_data<S, W>(store: &S, out: &mut W) -> Result<Row>
where
    S: WorksheetStore + ?Sized,
    W: Write + ?Sized,
{
    writeln!(out, "{}", ui::CALCULATING_STOCK)?;

    let table = store.all_values(Worksheet::Sales).await?;
    let history = table.parse_rows(Worksheet::Sales)?;
    let result = forecast_stock(&history)?;
    debug!(rows = history.len(), forecast = %result, "stock forecast calculated");
    Ok(result)
}
