//! Wallets API endpoints.

use api_types::wallet::{AddMoney, BalanceUpdated};
use axum::{Json, extract::State};
use engine::WalletTarget;

use crate::{ServerError, server::ServerState};

pub async fn add_money(
    State(state): State<ServerState>,
    Json(payload): Json<AddMoney>,
) -> Result<Json<BalanceUpdated>, ServerError> {
    let target = match (payload.wallet_id, payload.name.as_deref(), payload.group_id) {
        (Some(wallet_id), _, _) => WalletTarget::Id(wallet_id),
        (None, Some(name), Some(group_id)) => WalletTarget::Named { name, group_id },
        _ => {
            return Err(ServerError::Generic(
                "name and group_id required when wallet_id not provided".to_string(),
            ));
        }
    };

    let wallet = state.engine.add_money(target, payload.amount).await?;

    Ok(Json(BalanceUpdated {
        wallet_id: wallet.id,
        balance: wallet.balance,
    }))
}
