//! The module contains the errors the engine can raise.
//!
//! Validation errors ([`InvalidAmount`], [`InvalidParticipants`],
//! [`InvalidRatio`], [`UnknownSplitType`], [`InvalidMemberType`],
//! [`InvalidHeadCount`]) are reported before any state change. Resolution
//! errors ([`WalletNotFound`], [`WalletIdNotFound`]) abort the whole unit of
//! work.
//!
//! [`InvalidAmount`]: EngineError::InvalidAmount
//! [`InvalidParticipants`]: EngineError::InvalidParticipants
//! [`InvalidRatio`]: EngineError::InvalidRatio
//! [`UnknownSplitType`]: EngineError::UnknownSplitType
//! [`InvalidMemberType`]: EngineError::InvalidMemberType
//! [`InvalidHeadCount`]: EngineError::InvalidHeadCount
//! [`WalletNotFound`]: EngineError::WalletNotFound
//! [`WalletIdNotFound`]: EngineError::WalletIdNotFound
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid participants: {0}")]
    InvalidParticipants(String),
    #[error("Invalid ratio: {0}")]
    InvalidRatio(String),
    #[error("Unknown split type: \"{0}\"")]
    UnknownSplitType(String),
    #[error("Invalid member type: {0}")]
    InvalidMemberType(String),
    #[error("Invalid head count: {0}")]
    InvalidHeadCount(String),
    #[error(
        "No wallet for '{name}' in group {group_id} (existing members: [{}])",
        .existing.join(", ")
    )]
    WalletNotFound {
        name: String,
        group_id: i64,
        existing: Vec<String>,
    },
    #[error("Wallet {0} not found")]
    WalletIdNotFound(i32),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::InvalidParticipants(a), Self::InvalidParticipants(b)) => a == b,
            (Self::InvalidRatio(a), Self::InvalidRatio(b)) => a == b,
            (Self::UnknownSplitType(a), Self::UnknownSplitType(b)) => a == b,
            (Self::InvalidMemberType(a), Self::InvalidMemberType(b)) => a == b,
            (Self::InvalidHeadCount(a), Self::InvalidHeadCount(b)) => a == b,
            (
                Self::WalletNotFound {
                    name: a_name,
                    group_id: a_group,
                    existing: a_existing,
                },
                Self::WalletNotFound {
                    name: b_name,
                    group_id: b_group,
                    existing: b_existing,
                },
            ) => a_name == b_name && a_group == b_group && a_existing == b_existing,
            (Self::WalletIdNotFound(a), Self::WalletIdNotFound(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
