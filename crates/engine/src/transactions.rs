//! Transaction primitives.
//!
//! A `Transaction` is the immutable record of one split event: who paid,
//! who participated, how the total was divided. The `details` column stores
//! the participant → deduction map as JSON; the summary builder replays it
//! to reconstruct spending history.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};

use crate::SplitKind;

/// A split event ready to be persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct NewTransaction {
    pub group_id: i64,
    pub payer: String,
    pub participants: Vec<String>,
    pub total_amount: f64,
    pub split_kind: SplitKind,
    pub details: BTreeMap<String, f64>,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NewTransaction {
    /// Serialize to an `ActiveModel`, encoding list and map columns as JSON.
    ///
    /// Serialization of string keyed maps and string lists cannot fail, so
    /// this is infallible.
    pub(crate) fn into_active_model(self) -> ActiveModel {
        let participants =
            serde_json::to_string(&self.participants).unwrap_or_else(|_| "[]".to_string());
        let details = serde_json::to_string(&self.details).unwrap_or_else(|_| "{}".to_string());

        ActiveModel {
            id: ActiveValue::NotSet,
            group_id: ActiveValue::Set(self.group_id),
            payer: ActiveValue::Set(self.payer),
            participants: ActiveValue::Set(participants),
            total_amount: ActiveValue::Set(self.total_amount),
            split_type: ActiveValue::Set(self.split_kind.as_str().to_string()),
            details: ActiveValue::Set(details),
            category: ActiveValue::Set(self.category),
            created_at: ActiveValue::Set(self.created_at),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub group_id: i64,
    pub payer: String,
    pub participants: String,
    pub total_amount: f64,
    pub split_type: String,
    pub details: String,
    pub category: Option<String>,
    pub created_at: DateTimeUtc,
}

impl Model {
    /// Decode the stored participants list; a corrupt column degrades to an
    /// empty list rather than failing the read path.
    pub fn participant_names(&self) -> Vec<String> {
        serde_json::from_str(&self.participants).unwrap_or_default()
    }

    /// Decode the stored deduction map. `None` marks a malformed transaction;
    /// the caller decides whether to skip or surface it.
    pub fn deduction_map(&self) -> Option<BTreeMap<String, f64>> {
        serde_json::from_str(&self.details).ok()
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
