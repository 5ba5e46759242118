//! Read-only group views: balance summary and transaction replay.

use std::collections::BTreeMap;

use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, TransactionTrait};

use crate::{
    GroupSummary, MemberBalance, MemberReport, PaidEntry, ResultEngine, SpentEntry, transactions,
};

use super::{Engine, with_tx};

impl Engine {
    /// Current balances of a group.
    ///
    /// An unknown group yields an empty summary rather than an error.
    pub async fn group_summary(&self, group_id: i64) -> ResultEngine<GroupSummary> {
        with_tx!(self, |db_tx| {
            let rows = self.wallets_with_members(&db_tx, group_id).await?;

            let mut out = GroupSummary::default();
            for (wallet, member) in rows {
                out.balances.insert(member.name.clone(), wallet.balance);
                out.members.push(MemberBalance {
                    member_id: member.id,
                    wallet_id: wallet.id,
                    name: member.name,
                    balance: wallet.balance,
                    head_count: wallet.head_count,
                });
            }
            Ok(out)
        })
    }

    /// Replay all transactions of a group into per-member spending reports.
    ///
    /// Stored details and payer names are matched to members
    /// case-insensitively, the same rule wallet resolution uses. A row whose
    /// details column does not decode as a name -> number map is logged and
    /// skipped; one corrupt record never poisons the whole summary.
    pub async fn group_summary_detailed(
        &self,
        group_id: i64,
    ) -> ResultEngine<BTreeMap<String, MemberReport>> {
        with_tx!(self, |db_tx| {
            let wallets = self.wallets_with_members(&db_tx, group_id).await?;
            let canonical = Self::canonical_names(&wallets);

            let mut reports: BTreeMap<String, MemberReport> = wallets
                .iter()
                .map(|(wallet, member)| {
                    (
                        member.name.clone(),
                        MemberReport {
                            present_balance: wallet.balance,
                            head_count: wallet.head_count,
                            total_spent: 0.0,
                            total_paid: 0.0,
                            spent_where: Vec::new(),
                            paid_for: Vec::new(),
                            initial_balance_estimate: wallet.balance,
                        },
                    )
                })
                .collect();

            let txs = transactions::Entity::find()
                .filter(transactions::Column::GroupId.eq(group_id))
                .order_by_asc(transactions::Column::CreatedAt)
                .order_by_asc(transactions::Column::Id)
                .all(&db_tx)
                .await?;

            for tx in txs {
                let Some(details) = tx.deduction_map() else {
                    tracing::warn!(
                        transaction_id = tx.id,
                        group_id,
                        "skipping transaction with malformed details"
                    );
                    continue;
                };
                let participants = tx.participant_names();

                for (name, deduction) in &details {
                    let Some(member_name) = canonical.get(&name.trim().to_lowercase()) else {
                        continue;
                    };
                    let Some(report) = reports.get_mut(member_name) else {
                        continue;
                    };
                    report.total_spent += deduction;
                    report.spent_where.push(SpentEntry {
                        transaction_id: tx.id,
                        payer: tx.payer.clone(),
                        total_amount: tx.total_amount,
                        category: tx.category.clone(),
                        split_type: tx.split_type.clone(),
                        deduction: *deduction,
                        participants: participants.clone(),
                    });
                }

                if let Some(payer_name) = canonical.get(&tx.payer.trim().to_lowercase())
                    && let Some(report) = reports.get_mut(payer_name)
                {
                    report.total_paid += tx.total_amount;
                    report.paid_for.push(PaidEntry {
                        transaction_id: tx.id,
                        total_amount: tx.total_amount,
                        category: tx.category.clone(),
                        participants,
                        details,
                    });
                }
            }

            for report in reports.values_mut() {
                report.initial_balance_estimate = report.present_balance + report.total_spent;
            }

            Ok(reports)
        })
    }
}
