//! Expense model
//!
//! An expense is a single dated spend against one category. Expenses are
//! immutable once appended to the expenses sheet.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::row::{date_cell, money_cell, text_cell, RowDecodeError, SHEET_DATE_FORMAT};

/// Longest description accepted, in characters
pub const MAX_DESCRIPTION_LEN: usize = 25;

/// Column headers of the expenses sheet, in order
pub const EXPENSE_HEADERS: [&str; 4] = ["expense name", "amount", "date", "category"];

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub description: String,
    pub amount: Money,
    pub date: NaiveDate,
    pub category: String,
}

impl Expense {
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        date: NaiveDate,
        category: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            date,
            category: category.into(),
        }
    }

    /// Validate the expense against the rules for new records
    ///
    /// `today` anchors the accepted date window of `window_days` either side.
    pub fn validate(&self, today: NaiveDate, window_days: i64) -> Result<(), ExpenseValidationError> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        let len = description.chars().count();
        if len > MAX_DESCRIPTION_LEN {
            return Err(ExpenseValidationError::DescriptionTooLong(len));
        }

        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount);
        }

        // A window wider than the calendar accepts every representable date
        let window = Duration::try_days(window_days);
        let earliest = window
            .and_then(|w| today.checked_sub_signed(w))
            .unwrap_or(NaiveDate::MIN);
        let latest = window
            .and_then(|w| today.checked_add_signed(w))
            .unwrap_or(NaiveDate::MAX);
        if self.date < earliest || self.date > latest {
            return Err(ExpenseValidationError::DateOutOfRange {
                date: self.date,
                earliest,
                latest,
            });
        }

        Ok(())
    }

    /// Encode as an expenses sheet row
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.description.clone(),
            self.amount.to_string(),
            self.date.format(SHEET_DATE_FORMAT).to_string(),
            self.category.clone(),
        ]
    }

    /// Decode an expenses sheet row
    pub fn from_row(row: &[String]) -> Result<Self, RowDecodeError> {
        Ok(Self {
            description: text_cell(row, 0, EXPENSE_HEADERS[0])?,
            amount: money_cell(row, 1, EXPENSE_HEADERS[1])?,
            date: date_cell(row, 2, EXPENSE_HEADERS[2])?,
            category: text_cell(row, 3, EXPENSE_HEADERS[3])?,
        })
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}, {})",
            self.date.format(SHEET_DATE_FORMAT),
            self.description,
            self.amount,
            self.category
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyDescription,
    DescriptionTooLong(usize),
    NegativeAmount,
    DateOutOfRange {
        date: NaiveDate,
        earliest: NaiveDate,
        latest: NaiveDate,
    },
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Expense description cannot be empty"),
            Self::DescriptionTooLong(len) => write!(
                f,
                "Expense description too long ({} chars, max {})",
                len, MAX_DESCRIPTION_LEN
            ),
            Self::NegativeAmount => write!(f, "Expense amount cannot be negative"),
            Self::DateOutOfRange {
                date,
                earliest,
                latest,
            } => write!(
                f,
                "Expense date {} must be between {} and {}",
                date.format(SHEET_DATE_FORMAT),
                earliest.format(SHEET_DATE_FORMAT),
                latest.format(SHEET_DATE_FORMAT)
            ),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
