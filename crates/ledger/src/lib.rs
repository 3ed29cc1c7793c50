//! Shared expense ledger backed by a single CSV file.
//!
//! Every owner's rows live in the same table. The owner identifier is a plain
//! filter key and carries no security meaning.
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use ledger::{Amount, Category, LedgerStore};
//!
//! # fn main() -> Result<(), ledger::LedgerError> {
//! let store = LedgerStore::open("user_data.csv")?;
//! let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
//! store.append("abc", date, Category::Food, "12.50".parse::<Amount>()?, "lunch")?;
//! assert_eq!(store.filtered("abc")?.len(), 1);
//! # Ok(())
//! # }
//! ```

pub use amount::Amount;
pub use error::LedgerError;
pub use export::{EXPORT_COLUMNS, EXPORT_FILE_NAME, export_csv};
pub use record::{Category, ExpenseRecord};
pub use store::{COLUMNS, LedgerStore};

mod amount;
mod error;
mod export;
mod record;
mod store;

pub type ResultLedger<T> = Result<T, LedgerError>;
