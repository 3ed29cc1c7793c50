use axum::{Json, http::StatusCode, response::IntoResponse};
use ledger::LedgerError;

use serde::Serialize;
pub use server::{router, run_with_listener, spawn_with_listener};

mod categories;
mod expenses;
mod server;

pub mod types {
    pub mod expense {
        pub use api_types::expense::{
            CATEGORIES, Category, CategoryListResponse, ExpenseDeleted, ExpenseListResponse,
            ExpenseNew, ExpenseView,
        };
    }

    pub use api_types::OWNER_HEADER;
}

pub enum ServerError {
    Ledger(LedgerError),
    /// Delete index that is not a position in the caller's filtered view.
    InvalidIndex(String),
    /// A blocking ledger task panicked or was cancelled.
    Task(String),
    Generic(String),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_ledger_error(err: &LedgerError) -> StatusCode {
    match err {
        LedgerError::InvalidAmount(_) | LedgerError::InvalidCategory(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        LedgerError::Io(_) | LedgerError::Csv(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn message_for_ledger_error(err: LedgerError) -> String {
    match err {
        LedgerError::Io(_) | LedgerError::Csv(_) => {
            tracing::error!("ledger storage error: {err}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Ledger(err) => (status_for_ledger_error(&err), message_for_ledger_error(err)),
            ServerError::InvalidIndex(index) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("invalid entry index {index}"),
            ),
            ServerError::Task(err) => {
                tracing::error!("ledger task failed: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<LedgerError> for ServerError {
    fn from(value: LedgerError) -> Self {
        Self::Ledger(value)
    }
}
