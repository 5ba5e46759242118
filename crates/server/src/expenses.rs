//! Expense split API endpoints.

use api_types::expense::{SplitNew, SplitRecorded};
use axum::{Json, extract::State, http::StatusCode};
use engine::SplitExpense;

use crate::{ServerError, server::ServerState};

pub async fn split(
    State(state): State<ServerState>,
    Json(payload): Json<SplitNew>,
) -> Result<(StatusCode, Json<SplitRecorded>), ServerError> {
    if payload.payer.trim().is_empty() {
        return Err(ServerError::Generic("payer required".to_string()));
    }

    let outcome = state
        .engine
        .split_expense(SplitExpense {
            group_id: payload.group_id,
            payer: payload.payer,
            participants: payload.participants.into_names(),
            amount: payload.amount,
            split_type: payload.split_type,
            ratio: payload.ratio,
            category: payload.category,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SplitRecorded {
            transaction_id: outcome.transaction_id,
            details: outcome.details,
        }),
    ))
}
