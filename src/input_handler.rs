// src/input_handler.rs
use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::data_types::{Row, SANDWICH_TYPES};
use crate::error::{InputError, ValidationError};
use crate::ui;

/// Checks one line of operator input: exactly six comma-separated integers.
pub fn validate_data(line: &str) -> Result<Row, ValidationError> {
    let tokens: Vec<&str> = line.split(',').collect();
    if tokens.len() != SANDWICH_TYPES {
        return Err(ValidationError::WrongCount(tokens.len()));
    }

    let mut values = [0i64; SANDWICH_TYPES];
    for (slot, token) in values.iter_mut().zip(&tokens) {
        *slot = token
            .trim()
            .parse()
            .map_err(|_| ValidationError::NotInteger(token.to_string()))?;
    }

    Ok(Row::new(values))
}

/// Prompts until a valid sales line is entered.
///
/// There is no retry limit. Blocks on `input`; run it off the async runtime.
pub fn collect_sales<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<Row, InputError> {
    loop {
        writeln!(output, "{}", ui::SALES_INSTRUCTIONS)?;
        write!(output, "{}", ui::SALES_PROMPT)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(InputError::Closed);
        }
        let line = line.trim_end_matches(['\r', '\n']);

        match validate_data(line) {
            Ok(row) => {
                writeln!(output, "{}", ui::DATA_VALID)?;
                debug!(%row, "sales data accepted");
                return Ok(row);
            }
            Err(e) => {
                warn!(input = line, error = %e, "rejected sales data");
                writeln!(output, "{}", ui::invalid_data(&e))?;
            }
        }
    }
}
