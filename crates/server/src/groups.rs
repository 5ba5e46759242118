//! Group provisioning API endpoints.

use api_types::group::{GroupNew, GroupProvisioned, MemberPayload};
use axum::{Json, extract::State, http::StatusCode};
use engine::MemberSpec;

use crate::{ServerError, server::ServerState};

fn map_member(payload: MemberPayload) -> MemberSpec {
    match payload {
        MemberPayload::Simple(name) => MemberSpec::Simple(name),
        MemberPayload::Typed {
            name,
            member_type,
            head_count,
        } => MemberSpec::Typed {
            name,
            member_type,
            head_count,
        },
    }
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<GroupNew>,
) -> Result<(StatusCode, Json<GroupProvisioned>), ServerError> {
    if payload.members.is_empty() {
        return Err(ServerError::Generic("members required".to_string()));
    }

    let specs: Vec<MemberSpec> = payload.members.into_iter().map(map_member).collect();
    let members = state
        .engine
        .provision_group(payload.group_id, &specs)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(GroupProvisioned {
            group_id: payload.group_id,
            members,
        }),
    ))
}
