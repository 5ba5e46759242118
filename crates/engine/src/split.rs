//! Pure split computation.
//!
//! Given a total amount and a rule, produce the deduction owed by each
//! participant. These functions touch no storage; the reconciler in
//! [`crate::ops`] applies their output to wallet balances.

use std::collections::BTreeMap;

use crate::{EngineError, ResultEngine};

/// The rule used to divide an expense between participants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitKind {
    Equal,
    Ratio,
}

impl SplitKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::Ratio => "ratio",
        }
    }
}

impl TryFrom<&str> for SplitKind {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "equal" => Ok(Self::Equal),
            "ratio" => Ok(Self::Ratio),
            other => Err(EngineError::UnknownSplitType(other.to_string())),
        }
    }
}

fn validate_amount(amount: f64) -> ResultEngine<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(EngineError::InvalidAmount(format!(
            "amount must be a positive finite number, got {amount}"
        )));
    }
    Ok(())
}

/// Split `amount` evenly between `participants`.
///
/// Names are trimmed and blank entries dropped. Duplicates collapse
/// case-insensitively to a single share, keeping the first spelling seen:
/// wallet resolution is case-insensitive, so two spellings of one name refer
/// to the same wallet and must not be charged twice.
///
/// Each share is exactly `amount / n` in f64; the shares sum to `amount`
/// within floating tolerance.
pub fn equal_split(amount: f64, participants: &[String]) -> ResultEngine<BTreeMap<String, f64>> {
    validate_amount(amount)?;

    let mut seen: Vec<String> = Vec::new();
    let mut names: Vec<String> = Vec::new();
    for raw in participants {
        let name = raw.trim();
        if name.is_empty() {
            continue;
        }
        let folded = name.to_lowercase();
        if seen.contains(&folded) {
            continue;
        }
        seen.push(folded);
        names.push(name.to_string());
    }

    if names.is_empty() {
        return Err(EngineError::InvalidParticipants(
            "at least one participant is required".to_string(),
        ));
    }

    let share = amount / names.len() as f64;
    Ok(names.into_iter().map(|name| (name, share)).collect())
}

/// Split `amount` proportionally to the weights in `ratio`.
///
/// Each share is `amount * weight / sum(weights)`. Weight keys are trimmed;
/// blank keys are rejected rather than dropped, since a weight with no
/// participant is a malformed request.
pub fn ratio_split(amount: f64, ratio: &BTreeMap<String, f64>) -> ResultEngine<BTreeMap<String, f64>> {
    validate_amount(amount)?;

    if ratio.is_empty() {
        return Err(EngineError::InvalidRatio(
            "ratio must map at least one participant to a weight".to_string(),
        ));
    }

    let mut weights: Vec<(String, f64)> = Vec::with_capacity(ratio.len());
    let mut total = 0.0;
    for (raw, &weight) in ratio {
        let name = raw.trim();
        if name.is_empty() {
            return Err(EngineError::InvalidRatio(
                "ratio references an empty participant name".to_string(),
            ));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(EngineError::InvalidRatio(format!(
                "weight for '{name}' must be a non-negative finite number, got {weight}"
            )));
        }
        total += weight;
        weights.push((name.to_string(), weight));
    }

    if total <= 0.0 {
        return Err(EngineError::InvalidRatio(
            "ratio weights must not all be zero".to_string(),
        ));
    }

    Ok(weights
        .into_iter()
        .map(|(name, weight)| (name, amount * weight / total))
        .collect())
}
