//! Group summary API endpoints.

use api_types::summary::{
    DetailedSummaryResponse, GroupSummaryResponse, MemberReportView, MemberView, PaidView,
    SpentView,
};
use axum::{
    Json,
    extract::{Path, State},
};
use engine::{MemberReport, PaidEntry, SpentEntry};

use crate::{ServerError, server::ServerState};

fn map_report(report: MemberReport) -> MemberReportView {
    MemberReportView {
        present_balance: report.present_balance,
        head_count: report.head_count,
        total_spent: report.total_spent,
        total_paid: report.total_paid,
        spent_where: report.spent_where.into_iter().map(map_spent).collect(),
        paid_for: report.paid_for.into_iter().map(map_paid).collect(),
        initial_balance_estimate: report.initial_balance_estimate,
    }
}

fn map_spent(entry: SpentEntry) -> SpentView {
    SpentView {
        transaction_id: entry.transaction_id,
        payer: entry.payer,
        total_amount: entry.total_amount,
        category: entry.category,
        split_type: entry.split_type,
        deduction: entry.deduction,
        participants: entry.participants,
    }
}

fn map_paid(entry: PaidEntry) -> PaidView {
    PaidView {
        transaction_id: entry.transaction_id,
        total_amount: entry.total_amount,
        category: entry.category,
        participants: entry.participants,
        details: entry.details,
    }
}

pub async fn group_summary(
    State(state): State<ServerState>,
    Path(group_id): Path<i64>,
) -> Result<Json<GroupSummaryResponse>, ServerError> {
    let summary = state.engine.group_summary(group_id).await?;

    Ok(Json(GroupSummaryResponse {
        summary: summary.balances,
        members: summary
            .members
            .into_iter()
            .map(|member| MemberView {
                member_id: member.member_id,
                wallet_id: member.wallet_id,
                name: member.name,
                balance: member.balance,
                head_count: member.head_count,
            })
            .collect(),
    }))
}

pub async fn group_summary_detailed(
    State(state): State<ServerState>,
    Path(group_id): Path<i64>,
) -> Result<Json<DetailedSummaryResponse>, ServerError> {
    let reports = state.engine.group_summary_detailed(group_id).await?;

    Ok(Json(
        reports
            .into_iter()
            .map(|(name, report)| (name, map_report(report)))
            .collect(),
    ))
}
