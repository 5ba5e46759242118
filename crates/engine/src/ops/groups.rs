//! Group provisioning: implicit member creation and wallet upsert.

use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, TransactionTrait};

use crate::{MemberSpec, ResultEngine, members, wallets};

use super::{Engine, with_tx};

impl Engine {
    /// Provision members of a group, creating missing members and wallets.
    ///
    /// Members are matched case-insensitively, so `"alice"` and `"Alice"`
    /// reuse the same record. Wallet creation is idempotent per
    /// `(member, group)`; when a wallet already exists its `head_count` is
    /// kept (first-write-wins). Blank names are skipped. The whole request is
    /// a single unit of work: an invalid member type or head count anywhere
    /// in the list leaves nothing provisioned.
    ///
    /// Returns the canonical names that now have a wallet in the group.
    pub async fn provision_group(
        &self,
        group_id: i64,
        specs: &[MemberSpec],
    ) -> ResultEngine<Vec<String>> {
        // Validate every spec before touching storage.
        let mut resolved = Vec::with_capacity(specs.len());
        for spec in specs {
            let (name, head_count) = spec.resolve()?;
            if name.is_empty() {
                continue;
            }
            resolved.push((name, head_count));
        }

        with_tx!(self, |db_tx| {
            let mut provisioned = Vec::with_capacity(resolved.len());
            for (name, head_count) in resolved {
                let member = match self.find_member_by_name(&db_tx, &name).await? {
                    Some(member) => member,
                    None => members::new_member(&name).insert(&db_tx).await?,
                };

                let wallet = wallets::Entity::find()
                    .filter(wallets::Column::MemberId.eq(member.id))
                    .filter(wallets::Column::GroupId.eq(group_id))
                    .one(&db_tx)
                    .await?;
                if wallet.is_none() {
                    wallets::new_wallet(member.id, group_id, head_count)
                        .insert(&db_tx)
                        .await?;
                }

                provisioned.push(member.name);
            }
            Ok(provisioned)
        })
    }
}
