// src/config.rs
use std::path::PathBuf;

pub const CREDENTIALS_PATH: &str = "creds.json";
pub const SPREADSHEET_TITLE: &str = "love_sandwiches";

/// OAuth scopes requested for the service account.
pub const SCOPES: [&str; 3] = [
    "https://www.googleapis.com/auth/spreadsheets",
    "https://www.googleapis.com/auth/drive.file",
    "https://www.googleapis.com/auth/drive",
];

#[derive(Debug, Clone)]
pub struct Config {
    pub credentials_path: PathBuf,
    /// Drive title of the spreadsheet holding the three worksheets.
    pub spreadsheet_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            credentials_path: PathBuf::from(CREDENTIALS_PATH),
            spreadsheet_title: SPREADSHEET_TITLE.to_string(),
        }
    }
}
