//! The module contains the `Wallet` entity.
//!
//! A wallet holds the balance of one member inside one group; there is at
//! most one wallet per `(member, group)` pair. Balances are signed and may go
//! negative, which models money owed. Wallets are never deleted.

use sea_orm::entity::{ActiveValue, prelude::*};

/// A wallet snapshot joined with its member's name.
#[derive(Clone, Debug, PartialEq)]
pub struct Wallet {
    pub id: i32,
    pub member_id: i32,
    pub member_name: String,
    pub group_id: i64,
    pub balance: f64,
    pub head_count: i64,
}

impl Wallet {
    pub(crate) fn from_models(wallet: &Model, member: &super::members::Model) -> Self {
        Self {
            id: wallet.id,
            member_id: wallet.member_id,
            member_name: member.name.clone(),
            group_id: wallet.group_id,
            balance: wallet.balance,
            head_count: wallet.head_count,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "wallets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub member_id: i32,
    pub group_id: i64,
    pub balance: f64,
    pub head_count: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::members::Entity",
        from = "Column::MemberId",
        to = "super::members::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Members,
}

impl Related<super::members::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Members.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub(crate) fn new_wallet(member_id: i32, group_id: i64, head_count: i64) -> ActiveModel {
    ActiveModel {
        id: ActiveValue::NotSet,
        member_id: ActiveValue::Set(member_id),
        group_id: ActiveValue::Set(group_id),
        balance: ActiveValue::Set(0.0),
        head_count: ActiveValue::Set(head_count),
    }
}
