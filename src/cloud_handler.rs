// src/cloud_handler.rs
use std::fs::File;
use std::io::Read;
use std::path::Path;

use async_trait::async_trait;
use google_sheets4::api::{Scope, ValueRange};
use google_sheets4::{hyper, hyper_rustls, Sheets};
use serde::Deserialize;
use serde_json::{from_str, Value};
use tracing::{debug, info};
use yup_oauth2::{ServiceAccountAuthenticator, ServiceAccountKey};

use crate::config::{Config, SCOPES};
use crate::data_types::{Row, TableData, Worksheet};
use crate::error::StoreError;
use crate::store::WorksheetStore;

const DRIVE_FILES_URL: &str = "https://www.googleapis.com/drive/v3/files";
const SPREADSHEET_MIME_TYPE: &str = "application/vnd.google-apps.spreadsheet";

type Connector = hyper_rustls::HttpsConnector<hyper::client::HttpConnector>;

/// Google Sheets backed worksheet store. Built once per run.
pub struct CloudHandler {
    hub: Sheets<Connector>,
    spreadsheet_id: String,
}

#[derive(Debug, Deserialize)]
struct DriveFileList {
    #[serde(default)]
    files: Vec<DriveFile>,
}

#[derive(Debug, Deserialize)]
struct DriveFile {
    id: String,
}

impl CloudHandler {
    /// Authorizes with the service account key and locates the spreadsheet.
    pub async fn connect(config: &Config) -> Result<Self, StoreError> {
        let service_account_key = Self::load_key(&config.credentials_path)?;

        // Create authenticator
        let auth = ServiceAccountAuthenticator::builder(service_account_key)
            .build()
            .await
            .map_err(|e| StoreError::Auth(e.to_string()))?;

        let token = auth
            .token(&SCOPES)
            .await
            .map_err(|e| StoreError::Auth(e.to_string()))?;
        let bearer = token
            .token()
            .ok_or_else(|| StoreError::Auth("no access token issued".to_string()))?;
        let spreadsheet_id = Self::find_spreadsheet(bearer, &config.spreadsheet_title).await?;
        info!(%spreadsheet_id, "spreadsheet located");

        let connector = hyper_rustls::HttpsConnectorBuilder::new()
            .with_native_roots()
            .https_only()
            .enable_http1()
            .build();
        let hub = Sheets::new(hyper::Client::builder().build(connector), auth);

        Ok(CloudHandler {
            hub,
            spreadsheet_id,
        })
    }

    fn load_key(path: &Path) -> Result<ServiceAccountKey, StoreError> {
        let mut json = String::new();
        File::open(path)
            .and_then(|mut file| file.read_to_string(&mut json))
            .map_err(|source| StoreError::Credentials {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(from_str(&json)?)
    }

    /// Looks the spreadsheet up by exact title among files the account can see.
    async fn find_spreadsheet(bearer: &str, title: &str) -> Result<String, StoreError> {
        let list: DriveFileList = reqwest::Client::new()
            .get(DRIVE_FILES_URL)
            .bearer_auth(bearer)
            .query(&drive_query(title))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        list.files
            .into_iter()
            .next()
            .map(|file| file.id)
            .ok_or_else(|| StoreError::SpreadsheetNotFound(title.to_string()))
    }
}

#[async_trait]
impl WorksheetStore for CloudHandler {
    async fn all_values(&self, worksheet: Worksheet) -> Result<TableData, StoreError> {
        debug!(%worksheet, "fetching worksheet");
        let (_, response) = self
            .hub
            .spreadsheets()
            .values_get(&self.spreadsheet_id, worksheet.title())
            .add_scope(Scope::Spreadsheet)
            .doit()
            .await?;

        Ok(process_data(response))
    }

    async fn append_row(&self, worksheet: Worksheet, row: &Row) -> Result<(), StoreError> {
        let request = ValueRange {
            values: Some(vec![row.to_cells()]),
            ..Default::default()
        };

        let (_, response) = self
            .hub
            .spreadsheets()
            .values_append(request, &self.spreadsheet_id, worksheet.title())
            .value_input_option("RAW")
            .add_scope(Scope::Spreadsheet)
            .doit()
            .await?;

        debug!(
            %worksheet,
            updated_range = ?response.updates.and_then(|u| u.updated_range),
            "row appended"
        );
        Ok(())
    }
}

/// `files.list` parameters; shared drives are searched too.
fn drive_query(title: &str) -> Vec<(&'static str, String)> {
    let q = format!(
        "name = '{}' and mimeType = '{}' and trashed = false",
        escape_query(title),
        SPREADSHEET_MIME_TYPE
    );

    vec![
        ("q", q),
        ("fields", "files(id)".to_string()),
        ("pageSize", "1".to_string()),
        ("supportsAllDrives", "true".to_string()),
        ("includeItemsFromAllDrives", "true".to_string()),
    ]
}

fn escape_query(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

fn cell_text(cell: &Value) -> String {
    match cell {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Converts a values response into a table, first row being the header.
fn process_data(response: ValueRange) -> TableData {
    let values = match response.values {
        Some(values) => values,
        None => return TableData::empty(),
    };

    TableData::from_values(
        values
            .iter()
            .map(|row| row.iter().map(cell_text).collect())
            .collect(),
    )
}
