use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Mutex;

use async_trait::async_trait;
use love_sandwiches::input_handler::collect_sales;
use love_sandwiches::{
    run_cycle, DataError, Error, Row, StoreError, TableData, Worksheet, WorksheetStore,
};

const HEADERS: [&str; 6] = ["cheese", "ham", "egg", "tuna", "chicken", "turkey"];

/// In-memory spreadsheet recording every append in order.
struct FakeStore {
    sheets: Mutex<HashMap<Worksheet, TableData>>,
    appends: Mutex<Vec<(Worksheet, Row)>>,
    fail_on: Option<Worksheet>,
}

impl FakeStore {
    fn new() -> Self {
        let mut sheets = HashMap::new();
        for ws in [Worksheet::Sales, Worksheet::Surplus, Worksheet::Stock] {
            sheets.insert(
                ws,
                TableData {
                    headers: HEADERS.iter().map(|h| h.to_string()).collect(),
                    rows: Vec::new(),
                },
            );
        }
        FakeStore {
            sheets: Mutex::new(sheets),
            appends: Mutex::new(Vec::new()),
            fail_on: None,
        }
    }

    fn with_rows(self, worksheet: Worksheet, rows: &[[i64; 6]]) -> Self {
        {
            let mut sheets = self.sheets.lock().unwrap();
            let table = sheets.get_mut(&worksheet).unwrap();
            for row in rows {
                table.rows.push(row.iter().map(i64::to_string).collect());
            }
        }
        self
    }

    fn appends(&self) -> Vec<(Worksheet, Row)> {
        self.appends.lock().unwrap().clone()
    }
}

#[async_trait]
impl WorksheetStore for FakeStore {
    async fn all_values(&self, worksheet: Worksheet) -> Result<TableData, StoreError> {
        Ok(self.sheets.lock().unwrap()[&worksheet].clone())
    }

    async fn append_row(&self, worksheet: Worksheet, row: &Row) -> Result<(), StoreError> {
        if self.fail_on == Some(worksheet) {
            return Err(StoreError::Auth("permission denied".to_string()));
        }
        self.sheets
            .lock()
            .unwrap()
            .get_mut(&worksheet)
            .unwrap()
            .rows
            .push(row.values().iter().map(i64::to_string).collect());
        self.appends.lock().unwrap().push((worksheet, *row));
        Ok(())
    }
}

#[tokio::test]
async fn market_day_appends_sales_surplus_and_stock_in_order() {
    let store = FakeStore::new()
        .with_rows(Worksheet::Sales, &[[10; 6], [10; 6], [10; 6], [10; 6], [10; 6]])
        .with_rows(Worksheet::Stock, &[[1; 6], [30, 20, 20, 25, 15, 20]]);

    let mut console = Vec::new();
    let sales = collect_sales(Cursor::new("10,20\n10,20,30,40,50,60\n"), &mut console).unwrap();

    let report = run_cycle(&store, &mut console, sales).await.unwrap();

    // forecast window is the last four old rows plus the new one
    let expected_stock = Row::new([11, 13, 15, 18, 20, 22]);
    assert_eq!(
        store.appends(),
        vec![
            (Worksheet::Sales, Row::new([10, 20, 30, 40, 50, 60])),
            (Worksheet::Surplus, Row::new([20, 0, -10, -15, -35, -40])),
            (Worksheet::Stock, expected_stock),
        ]
    );
    assert_eq!(report.stock, expected_stock);
    assert_eq!(report.surplus, Row::new([20, 0, -10, -15, -35, -40]));

    let console = String::from_utf8(console).unwrap();
    let progress: Vec<&str> = console
        .lines()
        .filter(|line| line.contains("worksheet") || line.starts_with("Calculating"))
        .collect();
    assert_eq!(
        progress,
        vec![
            "Updating sales worksheet...",
            "Sales worksheet updated successfully.",
            "Calculating surplus data...",
            "Updating surplus worksheet...",
            "Surplus worksheet updated successfully.",
            "Calculating stock data...",
            "Updating stock worksheet...",
            "Stock worksheet updated successfully.",
        ]
    );
}

#[tokio::test]
async fn out_of_range_surplus_is_reported_not_panicked() {
    let store = FakeStore::new().with_rows(Worksheet::Stock, &[[1; 6]]);
    let sales = love_sandwiches::input_handler::validate_data("-9223372036854775808,0,0,0,0,0").unwrap();

    let err = run_cycle(&store, &mut Vec::<u8>::new(), sales).await.unwrap_err();

    assert!(matches!(
        err,
        Error::Data(DataError::Overflow { worksheet: Worksheet::Surplus, column: 1 })
    ));
    assert_eq!(store.appends().len(), 1);
}

#[tokio::test]
async fn first_market_day_forecasts_from_single_row() {
    let store = FakeStore::new().with_rows(Worksheet::Stock, &[[10; 6]]);

    let report = run_cycle(&store, &mut Vec::<u8>::new(), Row::new([10; 6])).await.unwrap();

    assert_eq!(report.surplus, Row::new([0; 6]));
    assert_eq!(report.stock, Row::new([11; 6]));
}

#[tokio::test]
async fn empty_stock_sheet_stops_after_sales() {
    let store = FakeStore::new();

    let err = run_cycle(&store, &mut Vec::<u8>::new(), Row::new([1, 2, 3, 4, 5, 6]))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Data(DataError::InsufficientData { worksheet: Worksheet::Stock })
    ));
    assert_eq!(
        store.appends(),
        vec![(Worksheet::Sales, Row::new([1, 2, 3, 4, 5, 6]))]
    );
}

#[tokio::test]
async fn store_failure_ends_the_run() {
    let mut store = FakeStore::new().with_rows(Worksheet::Stock, &[[5; 6]]);
    store.fail_on = Some(Worksheet::Surplus);

    let mut console = Vec::new();
    let err = run_cycle(&store, &mut console, Row::new([1; 6])).await.unwrap_err();

    assert!(matches!(err, Error::Store(StoreError::Auth(_))));
    assert_eq!(store.appends().len(), 1);
    let console = String::from_utf8(console).unwrap();
    assert!(console.contains("Updating surplus worksheet..."));
    assert!(!console.contains("Surplus worksheet updated successfully."));
    assert!(!console.contains("Calculating stock data..."));
}
