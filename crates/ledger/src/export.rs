//! CSV download of a filtered view.

use serde::Serialize;

use crate::{Amount, Category, ExpenseRecord, LedgerError, ResultLedger};

/// File name offered to the browser for the download.
pub const EXPORT_FILE_NAME: &str = "your_expenses.csv";

/// Header row of the export: the ledger columns minus the owner.
pub const EXPORT_COLUMNS: [&str; 4] = ["Date", "Category", "Amount", "Description"];

#[derive(Serialize)]
struct ExportRow<'a> {
    date: chrono::NaiveDate,
    category: Category,
    amount: Amount,
    description: &'a str,
}

/// Render `rows` as CSV with the owner column hidden, in the given order.
pub fn export_csv(rows: &[ExpenseRecord]) -> ResultLedger<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(EXPORT_COLUMNS)?;

    for row in rows {
        writer.serialize(ExportRow {
            date: row.date,
            category: row.category,
            amount: row.amount,
            description: &row.description,
        })?;
    }

    writer
        .into_inner()
        .map_err(|err| LedgerError::Io(err.into_error()))
}
