//! The module contains the `Member` entity and the provisioning payload.
//!
//! A member is identified by a name that is unique case-insensitively across
//! the whole system and is created implicitly the first time it is
//! referenced. A member participates in a group through a wallet.

use sea_orm::entity::{ActiveValue, prelude::*};

use crate::{EngineError, ResultEngine};

/// How many persons a wallet represents, per member type.
///
/// Used for reporting only; balances are always per wallet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemberType {
    Single,
    Couple,
    Family,
}

impl TryFrom<&str> for MemberType {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "couple" => Ok(Self::Couple),
            "family" => Ok(Self::Family),
            other => Err(EngineError::InvalidMemberType(format!(
                "'{other}' is not one of single, couple, family"
            ))),
        }
    }
}

/// A member entry in a provisioning request.
///
/// `Simple` carries just a name (head count 1). `Typed` carries a member
/// type; `family` must also supply an explicit head count.
#[derive(Clone, Debug, PartialEq)]
pub enum MemberSpec {
    Simple(String),
    Typed {
        name: String,
        member_type: String,
        head_count: Option<i64>,
    },
}

impl MemberSpec {
    /// Normalize the spec to `(trimmed_name, head_count)`.
    ///
    /// Returns a blank name as-is so the caller can skip it; type and head
    /// count are validated here.
    pub fn resolve(&self) -> ResultEngine<(String, i64)> {
        match self {
            Self::Simple(name) => Ok((name.trim().to_string(), 1)),
            Self::Typed {
                name,
                member_type,
                head_count,
            } => {
                let name = name.trim().to_string();
                let head_count = match MemberType::try_from(member_type.as_str()) {
                    Ok(MemberType::Single) => 1,
                    Ok(MemberType::Couple) => 2,
                    Ok(MemberType::Family) => {
                        let heads = head_count.ok_or_else(|| {
                            EngineError::InvalidHeadCount(format!(
                                "family member '{name}' requires an explicit head_count"
                            ))
                        })?;
                        if heads < 1 {
                            return Err(EngineError::InvalidHeadCount(format!(
                                "head_count for '{name}' must be >= 1, got {heads}"
                            )));
                        }
                        heads
                    }
                    Err(err) => return Err(err),
                };
                Ok((name, head_count))
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "members")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::wallets::Entity")]
    Wallets,
}

impl Related<super::wallets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Wallets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub(crate) fn new_member(name: &str) -> ActiveModel {
    ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set(name.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_spec_resolves_to_one_head() {
        let spec = MemberSpec::Simple("  Alice ".to_string());
        assert_eq!(spec.resolve().unwrap(), ("Alice".to_string(), 1));
    }

    #[test]
    fn typed_specs_resolve_head_counts() {
        let single = MemberSpec::Typed {
            name: "Bob".to_string(),
            member_type: "single".to_string(),
            head_count: None,
        };
        assert_eq!(single.resolve().unwrap(), ("Bob".to_string(), 1));

        let couple = MemberSpec::Typed {
            name: "Carol".to_string(),
            member_type: "Couple".to_string(),
            head_count: None,
        };
        assert_eq!(couple.resolve().unwrap(), ("Carol".to_string(), 2));

        let family = MemberSpec::Typed {
            name: "Dave".to_string(),
            member_type: "family".to_string(),
            head_count: Some(4),
        };
        assert_eq!(family.resolve().unwrap(), ("Dave".to_string(), 4));
    }

    #[test]
    fn family_without_head_count_is_rejected() {
        let spec = MemberSpec::Typed {
            name: "Dave".to_string(),
            member_type: "family".to_string(),
            head_count: None,
        };
        assert!(matches!(
            spec.resolve(),
            Err(EngineError::InvalidHeadCount(_))
        ));

        let zero = MemberSpec::Typed {
            name: "Dave".to_string(),
            member_type: "family".to_string(),
            head_count: Some(0),
        };
        assert!(matches!(
            zero.resolve(),
            Err(EngineError::InvalidHeadCount(_))
        ));
    }

    #[test]
    fn unknown_member_type_is_rejected() {
        let spec = MemberSpec::Typed {
            name: "Eve".to_string(),
            member_type: "household".to_string(),
            head_count: None,
        };
        assert!(matches!(
            spec.resolve(),
            Err(EngineError::InvalidMemberType(_))
        ));
    }
}
