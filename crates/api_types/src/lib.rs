use serde::{Deserialize, Serialize};

use std::collections::BTreeMap;

pub mod group {
    use super::*;

    /// One member entry in a group-creation request.
    ///
    /// Clients may send a bare name (`"Alice"`) or an object with a member
    /// type; both deserialize into one tagged variant resolved by the server
    /// in a single normalization step.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(untagged)]
    pub enum MemberPayload {
        Simple(String),
        Typed {
            name: String,
            #[serde(rename = "type")]
            member_type: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            head_count: Option<i64>,
        },
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct GroupNew {
        pub group_id: i64,
        pub members: Vec<MemberPayload>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct GroupProvisioned {
        pub group_id: i64,
        /// Canonical names that now have a wallet in the group.
        pub members: Vec<String>,
    }
}

pub mod wallet {
    use super::*;

    /// Add-money request: either `wallet_id`, or `name` + `group_id`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct AddMoney {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub wallet_id: Option<i32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub group_id: Option<i64>,
        pub amount: f64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BalanceUpdated {
        pub wallet_id: i32,
        pub balance: f64,
    }
}

pub mod expense {
    use super::*;

    /// Participants may arrive as a JSON list or as one comma-separated
    /// string; the server normalizes both to a list.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(untagged)]
    pub enum Participants {
        List(Vec<String>),
        Csv(String),
    }

    impl Participants {
        pub fn into_names(self) -> Vec<String> {
            match self {
                Self::List(names) => names,
                Self::Csv(csv) => csv
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
            }
        }
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct SplitNew {
        pub group_id: i64,
        pub payer: String,
        pub participants: Participants,
        pub amount: f64,
        /// `"equal"` or `"ratio"`.
        pub split_type: String,
        /// Structured name -> weight mapping, required for ratio splits.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub ratio: Option<BTreeMap<String, f64>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub category: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct SplitRecorded {
        pub transaction_id: i32,
        /// participant name -> deduction applied to their wallet.
        pub details: BTreeMap<String, f64>,
    }
}

pub mod summary {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct MemberView {
        pub member_id: i32,
        pub wallet_id: i32,
        pub name: String,
        pub balance: f64,
        pub head_count: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct GroupSummaryResponse {
        /// member name -> current balance
        pub summary: BTreeMap<String, f64>,
        pub members: Vec<MemberView>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct SpentView {
        pub transaction_id: i32,
        pub payer: String,
        pub total_amount: f64,
        pub category: Option<String>,
        pub split_type: String,
        pub deduction: f64,
        pub participants: Vec<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct PaidView {
        pub transaction_id: i32,
        pub total_amount: f64,
        pub category: Option<String>,
        pub participants: Vec<String>,
        pub details: BTreeMap<String, f64>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct MemberReportView {
        pub present_balance: f64,
        pub head_count: i64,
        pub total_spent: f64,
        pub total_paid: f64,
        pub spent_where: Vec<SpentView>,
        pub paid_for: Vec<PaidView>,
        /// `present_balance + total_spent`: a reconstruction that assumes no
        /// deposits after the recorded spending. An estimate, not a history.
        pub initial_balance_estimate: f64,
    }

    /// member name -> replayed spending report
    pub type DetailedSummaryResponse = BTreeMap<String, MemberReportView>;
}
