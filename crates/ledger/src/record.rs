//! A single row of the ledger file.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Amount, LedgerError};

/// Expense categories offered by the input form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Bills,
    Other,
}

impl Category {
    /// Every category, in the order the form lists them.
    pub const ALL: [Category; 5] = [
        Self::Food,
        Self::Transport,
        Self::Shopping,
        Self::Bills,
        Self::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Shopping => "Shopping",
            Self::Bills => "Bills",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s.trim())
            .ok_or_else(|| LedgerError::InvalidCategory(s.to_string()))
    }
}

/// One expense as stored in the ledger file.
///
/// The field order is the column order of the file. Column names are kept
/// from the legacy form so that existing files load unchanged; the owner
/// column is still called "User Password" even though it is only a filter key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    #[serde(rename = "User Password")]
    pub owner: String,
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Category")]
    pub category: Category,
    #[serde(rename = "Amount")]
    pub amount: Amount,
    #[serde(rename = "Description")]
    pub description: String,
}

impl ExpenseRecord {
    pub fn new(
        owner: impl Into<String>,
        date: NaiveDate,
        category: Category,
        amount: Amount,
        description: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            date,
            category,
            amount,
            description: description.into(),
        }
    }

    pub fn belongs_to(&self, owner: &str) -> bool {
        self.owner == owner
    }
}
