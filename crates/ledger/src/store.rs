//! The ledger store: every owner's expenses in one shared CSV file.
//!
//! Each operation is a full load-mutate-store cycle on the file. There is no
//! locking and no isolation between callers: two concurrent writers race and
//! the last one to write the file wins.
//!
//! Two behaviors are kept from the legacy form and are known hazards:
//!
//! - [`LedgerStore::append`] re-sorts and rewrites the whole table, so adding
//!   an expense for one owner also rewrites every other owner's rows.
//! - [`LedgerStore::delete_at`] targets a row by its position in the owner's
//!   filtered view, not by a stable id. The position shifts whenever the view
//!   changes between reading and deleting.

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;

use crate::{Amount, Category, ExpenseRecord, ResultLedger};

/// Header row of the ledger file, in column order.
pub const COLUMNS: [&str; 5] = ["User Password", "Date", "Category", "Amount", "Description"];

#[derive(Clone, Debug)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    /// Bind a store to `path`, creating a header-only file if none exists.
    pub fn open(path: impl Into<PathBuf>) -> ResultLedger<Self> {
        let store = Self { path: path.into() };

        if !store.path.exists() {
            if let Some(parent) = store.path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
            store.store(&[])?;
            tracing::info!("created empty ledger at {}", store.path.display());
        }

        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full table, all owners included, in file order.
    pub fn load(&self) -> ResultLedger<Vec<ExpenseRecord>> {
        let mut reader = csv::Reader::from_path(&self.path)?;
        let rows = reader
            .deserialize()
            .collect::<Result<Vec<ExpenseRecord>, _>>()?;
        Ok(rows)
    }

    /// The filtered view: rows of `owner` in file order.
    pub fn filtered(&self, owner: &str) -> ResultLedger<Vec<ExpenseRecord>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|row| row.belongs_to(owner))
            .collect())
    }

    /// Add one expense and rewrite the table sorted by date, newest first.
    ///
    /// The sort is stable and spans all owners. Rows sharing a date keep
    /// their previous relative order, the new row going last among them.
    pub fn append(
        &self,
        owner: &str,
        date: NaiveDate,
        category: Category,
        amount: Amount,
        description: &str,
    ) -> ResultLedger<()> {
        let mut rows = self.load()?;
        rows.push(ExpenseRecord::new(owner, date, category, amount, description));
        rows.sort_by(|a, b| b.date.cmp(&a.date));

        self.store(&rows)?;
        tracing::debug!("appended expense dated {date}, ledger now has {} rows", rows.len());
        Ok(())
    }

    /// Remove the `index`-th row of `owner`'s filtered view.
    ///
    /// Returns `false`, leaving the file untouched, when `index` is past the
    /// end of the view. On success the owner's remaining rows are moved to the
    /// end of the table in their previous relative order.
    pub fn delete_at(&self, owner: &str, index: usize) -> ResultLedger<bool> {
        let (mut owned, mut table): (Vec<_>, Vec<_>) = self
            .load()?
            .into_iter()
            .partition(|row| row.belongs_to(owner));

        if index >= owned.len() {
            tracing::debug!("delete index {index} out of range ({} rows)", owned.len());
            return Ok(false);
        }

        owned.remove(index);
        table.append(&mut owned);

        self.store(&table)?;
        tracing::debug!("deleted entry {index}, ledger now has {} rows", table.len());
        Ok(true)
    }

    /// Overwrite the file with `rows`, header first.
    fn store(&self, rows: &[ExpenseRecord]) -> ResultLedger<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;
        writer.write_record(COLUMNS)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}
