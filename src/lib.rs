// src/lib.rs
pub mod cloud_handler;
pub mod config;
pub mod data_types;
pub mod error;
pub mod forecast;
pub mod input_handler;
pub mod pipeline;
pub mod store;
pub mod ui;

pub use cloud_handler::CloudHandler;
pub use config::Config;
pub use data_types::{Row, TableData, Worksheet};
pub use error::{DataError, Error, InputError, StoreError, ValidationError};
pub use pipeline::{run_cycle, CycleReport};
pub use store::WorksheetStore;
