// src/ui.rs
// Console text shown to the operator.

pub const WELCOME: &str = "Welcome to Love Sandwiches Data Automation";

pub const SALES_INSTRUCTIONS: &str = "Please enter sales data from the last market.\n\
Data should be six numbers, separated by commas.\n\
Example: 10,20,30,40,50,60\n";

pub const SALES_PROMPT: &str = "Enter your data here: ";

pub const DATA_VALID: &str = "Data is valid!";

pub const CALCULATING_SURPLUS: &str = "Calculating surplus data...\n";

pub const CALCULATING_STOCK: &str = "Calculating stock data...\n";

pub fn invalid_data(reason: &dyn std::fmt::Display) -> String {
    format!("Invalid data: {}, please try again.\n", reason)
}

pub fn updating(worksheet: crate::data_types::Worksheet) -> String {
    format!("Updating {} worksheet...\n", worksheet)
}

pub fn updated(worksheet: crate::data_types::Worksheet) -> String {
    format!("{} worksheet updated successfully.\n", worksheet.label())
}
