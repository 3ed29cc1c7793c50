//! Expense API endpoints.
//!
//! Every handler acts on the caller's filtered view of the shared ledger.

use api_types::expense::{Category, ExpenseDeleted, ExpenseListResponse, ExpenseNew, ExpenseView};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use ledger::{Amount, EXPORT_FILE_NAME, ExpenseRecord};

use crate::{
    ServerError,
    server::{Owner, ServerState},
};

/// Smallest amount the form accepts (0.01).
const MIN_AMOUNT_MINOR: i64 = 1;

fn to_ledger_category(category: Category) -> ledger::Category {
    match category {
        Category::Food => ledger::Category::Food,
        Category::Transport => ledger::Category::Transport,
        Category::Shopping => ledger::Category::Shopping,
        Category::Bills => ledger::Category::Bills,
        Category::Other => ledger::Category::Other,
    }
}

fn from_ledger_category(category: ledger::Category) -> Category {
    match category {
        ledger::Category::Food => Category::Food,
        ledger::Category::Transport => Category::Transport,
        ledger::Category::Shopping => Category::Shopping,
        ledger::Category::Bills => Category::Bills,
        ledger::Category::Other => Category::Other,
    }
}

fn map_expense(record: ExpenseRecord) -> ExpenseView {
    ExpenseView {
        date: record.date,
        category: from_ledger_category(record.category),
        amount_minor: record.amount.cents(),
        description: record.description,
    }
}

pub async fn add(
    Extension(Owner(owner)): Extension<Owner>,
    State(state): State<ServerState>,
    Json(payload): Json<ExpenseNew>,
) -> Result<StatusCode, ServerError> {
    if payload.amount_minor < MIN_AMOUNT_MINOR {
        return Err(ServerError::Generic("amount must be at least 0.01".to_string()));
    }

    let category = to_ledger_category(payload.category);
    let amount = Amount::new(payload.amount_minor);
    state
        .with_ledger(move |ledger| {
            ledger.append(&owner, payload.date, category, amount, &payload.description)
        })
        .await?;

    Ok(StatusCode::CREATED)
}

pub async fn list(
    Extension(Owner(owner)): Extension<Owner>,
    State(state): State<ServerState>,
) -> Result<Json<ExpenseListResponse>, ServerError> {
    let expenses = state
        .with_ledger(move |ledger| ledger.filtered(&owner))
        .await?
        .into_iter()
        .map(map_expense)
        .collect();

    Ok(Json(ExpenseListResponse { expenses }))
}

pub async fn export(
    Extension(Owner(owner)): Extension<Owner>,
    State(state): State<ServerState>,
) -> Result<impl IntoResponse, ServerError> {
    let csv = state
        .with_ledger(move |ledger| ledger::export_csv(&ledger.filtered(&owner)?))
        .await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
            ),
        ],
        csv,
    ))
}

/// Delete by position in the filtered view. The raw path segment is parsed
/// here so that negative or non-numeric indexes get the same answer as an
/// index past the end.
pub async fn remove(
    Extension(Owner(owner)): Extension<Owner>,
    State(state): State<ServerState>,
    Path(raw_index): Path<String>,
) -> Result<Json<ExpenseDeleted>, ServerError> {
    let Ok(index) = raw_index.parse::<usize>() else {
        return Err(ServerError::InvalidIndex(raw_index));
    };

    let deleted = state
        .with_ledger(move |ledger| ledger.delete_at(&owner, index))
        .await?;

    if !deleted {
        return Err(ServerError::InvalidIndex(raw_index));
    }

    Ok(Json(ExpenseDeleted { index }))
}
