use serde::{Deserialize, Serialize};

/// Header carrying the owner identifier of the caller.
///
/// The form labels it "password", but it is only a plaintext filter key over
/// the shared ledger.
pub const OWNER_HEADER: &str = "ledger-owner";

pub mod expense {
    use super::*;
    use chrono::NaiveDate;

    /// Category of an expense. Serialized by its exact name (`"Food"`).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub enum Category {
        Food,
        Transport,
        Shopping,
        Bills,
        Other,
    }

    /// Values of the category selector, in display order.
    pub const CATEGORIES: [Category; 5] = [
        Category::Food,
        Category::Transport,
        Category::Shopping,
        Category::Bills,
        Category::Other,
    ];

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseNew {
        /// Calendar date, `YYYY-MM-DD`.
        pub date: NaiveDate,
        pub category: Category,
        /// Amount in cents. Must be >= 1 (0.01).
        pub amount_minor: i64,
        #[serde(default)]
        pub description: String,
    }

    /// One row of the caller's filtered view. The owner is never echoed back.
    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    pub struct ExpenseView {
        pub date: NaiveDate,
        pub category: Category,
        pub amount_minor: i64,
        pub description: String,
    }

    /// Filtered view, newest first. The position of a row in `expenses` is
    /// the index the delete endpoint expects.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseListResponse {
        pub expenses: Vec<ExpenseView>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseDeleted {
        pub index: usize,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoryListResponse {
        pub categories: Vec<Category>,
    }
}
