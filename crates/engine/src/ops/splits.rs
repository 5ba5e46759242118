//! Split-and-reconcile: the write path of an expense split.

use std::collections::BTreeMap;

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, TransactionTrait};

use crate::{
    EngineError, ResultEngine, SplitKind, equal_split, ratio_split,
    transactions::NewTransaction, wallets,
};

use super::{Engine, with_tx};

/// One split request.
#[derive(Clone, Debug, PartialEq)]
pub struct SplitExpense {
    pub group_id: i64,
    pub payer: String,
    pub participants: Vec<String>,
    pub amount: f64,
    /// Split rule tag, `"equal"` or `"ratio"`.
    pub split_type: String,
    /// Required when `split_type` is `"ratio"`; ignored otherwise.
    pub ratio: Option<BTreeMap<String, f64>>,
    pub category: Option<String>,
}

/// Result of a committed split.
#[derive(Clone, Debug, PartialEq)]
pub struct SplitOutcome {
    pub transaction_id: i32,
    pub details: BTreeMap<String, f64>,
}

impl Engine {
    /// Split an expense and reconcile wallet balances, all or nothing.
    ///
    /// Computes each participant's deduction with the split calculator, then
    /// inside one database transaction debits every resolved wallet and
    /// records the transaction row. If any participant has no wallet in the
    /// group, the unit of work is dropped uncommitted and no balance changes.
    ///
    /// The payer is recorded on the transaction but not credited; balances
    /// going negative model money owed.
    pub async fn split_expense(&self, cmd: SplitExpense) -> ResultEngine<SplitOutcome> {
        let kind = SplitKind::try_from(cmd.split_type.as_str())?;
        let details = match kind {
            SplitKind::Equal => equal_split(cmd.amount, &cmd.participants)?,
            SplitKind::Ratio => {
                let ratio = cmd.ratio.as_ref().ok_or_else(|| {
                    EngineError::InvalidRatio(
                        "ratio split requires a ratio mapping".to_string(),
                    )
                })?;
                ratio_split(cmd.amount, ratio)?
            }
        };

        with_tx!(self, |db_tx| {
            for (name, deduction) in &details {
                let wallet = self
                    .require_wallet_by_name(&db_tx, cmd.group_id, name)
                    .await?;

                let active = wallets::ActiveModel {
                    id: ActiveValue::Set(wallet.id),
                    balance: ActiveValue::Set(wallet.balance - deduction),
                    ..Default::default()
                };
                active.update(&db_tx).await?;
            }

            let record = NewTransaction {
                group_id: cmd.group_id,
                payer: cmd.payer.trim().to_string(),
                participants: cmd.participants.clone(),
                total_amount: cmd.amount,
                split_kind: kind,
                details: details.clone(),
                category: cmd.category.clone(),
                created_at: Utc::now(),
            };
            let inserted = record.into_active_model().insert(&db_tx).await?;

            Ok(SplitOutcome {
                transaction_id: inserted.id,
                details,
            })
        })
    }
}
