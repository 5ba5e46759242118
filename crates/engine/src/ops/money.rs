//! Money addition onto an existing wallet.

use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, ModelTrait, TransactionTrait};

use crate::{EngineError, ResultEngine, Wallet, members, wallets};

use super::{Engine, with_tx};

/// How the caller identifies the wallet to credit.
#[derive(Clone, Debug, PartialEq)]
pub enum WalletTarget<'a> {
    Id(i32),
    Named { name: &'a str, group_id: i64 },
}

impl Engine {
    /// Add money to a wallet, returning the updated wallet snapshot.
    ///
    /// The amount must be positive and finite; withdrawals are not a sign
    /// convention of this operation. The wallet must already exist, money
    /// addition never provisions one. The snapshot is taken inside the same
    /// unit of work as the credit, so its id and balance are consistent even
    /// under concurrent writers.
    pub async fn add_money(&self, target: WalletTarget<'_>, amount: f64) -> ResultEngine<Wallet> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(EngineError::InvalidAmount(format!(
                "amount must be a positive finite number, got {amount}"
            )));
        }

        with_tx!(self, |db_tx| {
            let wallet = match target {
                WalletTarget::Id(id) => wallets::Entity::find_by_id(id)
                    .one(&db_tx)
                    .await?
                    .ok_or(EngineError::WalletIdNotFound(id))?,
                WalletTarget::Named { name, group_id } => {
                    self.require_wallet_by_name(&db_tx, group_id, name).await?
                }
            };
            let member = wallet
                .find_related(members::Entity)
                .one(&db_tx)
                .await?
                .ok_or(EngineError::WalletIdNotFound(wallet.id))?;

            let new_balance = wallet.balance + amount;
            let active = wallets::ActiveModel {
                id: ActiveValue::Set(wallet.id),
                balance: ActiveValue::Set(new_balance),
                ..Default::default()
            };
            active.update(&db_tx).await?;

            let mut snapshot = Wallet::from_models(&wallet, &member);
            snapshot.balance = new_balance;
            Ok(snapshot)
        })
    }

    /// Return a wallet snapshot joined with its member's name.
    pub async fn wallet(&self, target: WalletTarget<'_>) -> ResultEngine<Wallet> {
        with_tx!(self, |db_tx| {
            let wallet = match target {
                WalletTarget::Id(id) => wallets::Entity::find_by_id(id)
                    .one(&db_tx)
                    .await?
                    .ok_or(EngineError::WalletIdNotFound(id))?,
                WalletTarget::Named { name, group_id } => {
                    self.require_wallet_by_name(&db_tx, group_id, name).await?
                }
            };

            let member = wallet
                .find_related(members::Entity)
                .one(&db_tx)
                .await?
                .ok_or(EngineError::WalletIdNotFound(wallet.id))?;

            Ok(Wallet::from_models(&wallet, &member))
        })
    }
}
