// src/pipeline.rs
use std::io::Write;

use tracing::info;

use crate::data_types::{Row, Worksheet};
use crate::error::Result;
use crate::forecast::{calculate_stock_data, calculate_surplus_data};
use crate::store::{update_worksheet, WorksheetStore};

/// Rows written by one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    pub sales: Row,
    pub surplus: Row,
    pub stock: Row,
}

/// Records `sales`, then derives and records surplus and the stock forecast.
/// Progress lines go to `out`.
///
/// Stops at the first failure; rows already appended stay on the sheet.
pub async fn run_cycle<S, W>(store: &S, out: &mut W, sales: Row) -> Result<CycleReport>
where
    S: WorksheetStore + ?Sized,
    W: Write + ?Sized,
{
    update_worksheet(store, out, Worksheet::Sales, &sales).await?;

    let surplus = calculate_surplus_data(store, out, &sales).await?;
    update_worksheet(store, out, Worksheet::Surplus, &surplus).await?;

    // reads the sales sheet after the append above, so the new row is included
    let stock = calculate_stock_data(store, out).await?;
    update_worksheet(store, out, Worksheet::Stock, &stock).await?;

    info!(%sales, %surplus, %stock, "market day recorded");
    Ok(CycleReport {
        sales,
        surplus,
        stock,
    })
}
