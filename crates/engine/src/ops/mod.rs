use std::collections::BTreeMap;

use sea_orm::{ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, sea_query::Expr};

use crate::{EngineError, ResultEngine, members, wallets};

mod groups;
mod money;
mod splits;
mod summary;

pub use money::WalletTarget;
pub use splits::{SplitExpense, SplitOutcome};

/// Run a block inside a DB transaction, committing on success and rolling back on error.
macro_rules! with_tx {
    ($self:expr, |$tx:ident| $body:expr) => {{
        let $tx = $self.database.begin().await?;
        let result = $body;
        match result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }};
}

pub(crate) use with_tx;

#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Find a member by case-insensitive trimmed name.
    pub(crate) async fn find_member_by_name<C: ConnectionTrait>(
        &self,
        conn: &C,
        name: &str,
    ) -> ResultEngine<Option<members::Model>> {
        let member = members::Entity::find()
            .filter(Expr::cust("LOWER(name)").eq(name.trim().to_lowercase()))
            .one(conn)
            .await?;
        Ok(member)
    }

    /// Resolve a participant name to its wallet in a group.
    ///
    /// A miss reports the names that do have a wallet in the group, so a
    /// caller can tell a typo from a missing provisioning step.
    pub(crate) async fn require_wallet_by_name<C: ConnectionTrait>(
        &self,
        conn: &C,
        group_id: i64,
        name: &str,
    ) -> ResultEngine<wallets::Model> {
        let wallet = match self.find_member_by_name(conn, name).await? {
            Some(member) => {
                wallets::Entity::find()
                    .filter(wallets::Column::MemberId.eq(member.id))
                    .filter(wallets::Column::GroupId.eq(group_id))
                    .one(conn)
                    .await?
            }
            None => None,
        };

        match wallet {
            Some(wallet) => Ok(wallet),
            None => Err(EngineError::WalletNotFound {
                name: name.trim().to_string(),
                group_id,
                existing: self.member_names_in_group(conn, group_id).await?,
            }),
        }
    }

    /// Member names that currently have a wallet in the group.
    pub(crate) async fn member_names_in_group<C: ConnectionTrait>(
        &self,
        conn: &C,
        group_id: i64,
    ) -> ResultEngine<Vec<String>> {
        let rows = wallets::Entity::find()
            .filter(wallets::Column::GroupId.eq(group_id))
            .find_also_related(members::Entity)
            .all(conn)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, member)| member.map(|m| m.name))
            .collect())
    }

    /// Wallets of a group joined with their members, as a reusable base for
    /// the read paths.
    pub(crate) async fn wallets_with_members<C: ConnectionTrait>(
        &self,
        conn: &C,
        group_id: i64,
    ) -> ResultEngine<Vec<(wallets::Model, members::Model)>> {
        let rows = wallets::Entity::find()
            .filter(wallets::Column::GroupId.eq(group_id))
            .find_also_related(members::Entity)
            .all(conn)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(wallet, member)| member.map(|m| (wallet, m)))
            .collect())
    }

    /// Case-folded name -> canonical member name, for matching stored payer
    /// and details keys against members with the same rule used by wallet
    /// resolution.
    pub(crate) fn canonical_names(
        wallets: &[(wallets::Model, members::Model)],
    ) -> BTreeMap<String, String> {
        wallets
            .iter()
            .map(|(_, member)| (member.name.trim().to_lowercase(), member.name.clone()))
            .collect()
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Construct `Engine`
    pub fn build(self) -> Engine {
        Engine {
            database: self.database,
        }
    }
}
