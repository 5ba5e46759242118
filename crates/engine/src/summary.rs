//! Read-model types returned by the summary builder.

use std::collections::BTreeMap;

/// One member row in the balance summary.
#[derive(Clone, Debug, PartialEq)]
pub struct MemberBalance {
    pub member_id: i32,
    pub wallet_id: i32,
    pub name: String,
    pub balance: f64,
    pub head_count: i64,
}

/// Balance view of a whole group.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GroupSummary {
    /// member name -> current balance
    pub balances: BTreeMap<String, f64>,
    pub members: Vec<MemberBalance>,
}

/// One transaction a member took part in, seen from their side.
#[derive(Clone, Debug, PartialEq)]
pub struct SpentEntry {
    pub transaction_id: i32,
    pub payer: String,
    pub total_amount: f64,
    pub category: Option<String>,
    pub split_type: String,
    pub deduction: f64,
    pub participants: Vec<String>,
}

/// One transaction a member paid for.
#[derive(Clone, Debug, PartialEq)]
pub struct PaidEntry {
    pub transaction_id: i32,
    pub total_amount: f64,
    pub category: Option<String>,
    pub participants: Vec<String>,
    pub details: BTreeMap<String, f64>,
}

/// Spending history of one member, reconstructed by replaying the group's
/// transactions.
///
/// `initial_balance_estimate` is `present_balance + total_spent`: what the
/// balance would have been before the recorded spending, assuming no deposits
/// arrived in between. It is an estimate, not an authoritative history.
#[derive(Clone, Debug, PartialEq)]
pub struct MemberReport {
    pub present_balance: f64,
    pub head_count: i64,
    pub total_spent: f64,
    pub total_paid: f64,
    pub spent_where: Vec<SpentEntry>,
    pub paid_for: Vec<PaidEntry>,
    pub initial_balance_estimate: f64,
}
