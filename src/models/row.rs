//! Cell-level decoding shared by the expense and budget row formats

use std::fmt;

use chrono::NaiveDate;

use super::money::Money;

/// Date format used for the date column of the expenses sheet
pub const SHEET_DATE_FORMAT: &str = "%d/%m/%Y";

/// A sheet row that could not be turned into a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowDecodeError {
    MissingColumn(&'static str),
    BadAmount { column: &'static str, value: String },
    BadDate(String),
}

impl fmt::Display for RowDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingColumn(column) => write!(f, "missing column '{}'", column),
            Self::BadAmount { column, value } => {
                write!(f, "column '{}' is not an amount: '{}'", column, value)
            }
            Self::BadDate(value) => write!(f, "'{}' is not a DD/MM/YYYY date", value),
        }
    }
}

impl std::error::Error for RowDecodeError {}

pub(crate) fn text_cell(
    row: &[String],
    index: usize,
    column: &'static str,
) -> Result<String, RowDecodeError> {
    row.get(index)
        .map(|cell| cell.trim().to_string())
        .ok_or(RowDecodeError::MissingColumn(column))
}

pub(crate) fn money_cell(
    row: &[String],
    index: usize,
    column: &'static str,
) -> Result<Money, RowDecodeError> {
    let value = text_cell(row, index, column)?;
    // Blank numeric cells read back as zero, as a spreadsheet would sum them
    if value.is_empty() {
        return Ok(Money::zero());
    }
    Money::parse(&value).map_err(|_| RowDecodeError::BadAmount { column, value })
}

pub(crate) fn date_cell(
    row: &[String],
    index: usize,
    column: &'static str,
) -> Result<NaiveDate, RowDecodeError> {
    let value = text_cell(row, index, column)?;
    NaiveDate::parse_from_str(&value, SHEET_DATE_FORMAT).map_err(|_| RowDecodeError::BadDate(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_blank_money_cell_is_zero() {
        assert_eq!(money_cell(&row(&["x", ""]), 1, "amount"), Ok(Money::zero()));
    }

    #[test]
    fn test_missing_column() {
        assert_eq!(
            money_cell(&row(&["x"]), 1, "amount"),
            Err(RowDecodeError::MissingColumn("amount"))
        );
    }

    #[test]
    fn test_date_cell() {
        let date = date_cell(&row(&["01/03/2025"]), 0, "date").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert!(date_cell(&row(&["2025-03-01"]), 0, "date").is_err());
    }
}
