use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::core::error::ArgumentError;

/// An immutable account record.
///
/// Both fields are checked once in `new` and can only be read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Account {
    id: Uuid,
    name: String,
}

impl Account {
    /// Creates an account, rejecting the nil id and blank names.
    pub fn new(id: Uuid, name: impl Into<String>) -> Result<Self, ArgumentError> {
        let name = name.into();
        if id.is_nil() {
            return Err(ArgumentError::NilId);
        }
        if name.trim().is_empty() {
            return Err(ArgumentError::BlankName);
        }
        Ok(Self { id, name })
    }

    /// Creates an account with a freshly generated id.
    pub fn with_random_id(name: impl Into<String>) -> Result<Self, ArgumentError> {
        Self::new(Uuid::new_v4(), name)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Account(Id: {}, Name: {})", self.id, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_creation() {
        let id = Uuid::new_v4();
        let account = Account::new(id, "Mike Schnobrich").unwrap();

        assert_eq!(account.id(), id);
        assert_eq!(account.name(), "Mike Schnobrich");
    }

    #[test]
    fn test_blank_names_are_rejected() {
        for name in ["", "   ", "\t\n"] {
            let err = Account::new(Uuid::new_v4(), name).unwrap_err();
            assert_eq!(err, ArgumentError::BlankName);
            assert_eq!(err.param(), "name");
            assert!(err.to_string().starts_with("Name cannot be null or empty"));
        }
    }

    #[test]
    fn test_nil_id_is_rejected() {
        let err = Account::new(Uuid::nil(), "Valid Name").unwrap_err();
        assert_eq!(err, ArgumentError::NilId);
        assert_eq!(err.param(), "id");
        assert!(err.to_string().starts_with("Id cannot be empty"));
    }

    #[test]
    fn test_display() {
        let id = Uuid::new_v4();
        let account = Account::new(id, "Mike Schnobrich").unwrap();
        assert_eq!(
            account.to_string(),
            format!("Account(Id: {id}, Name: Mike Schnobrich)")
        );
    }

    #[test]
    fn test_equality_is_structural() {
        let id = Uuid::new_v4();
        let a = Account::new(id, "Ada").unwrap();
        let b = Account::new(id, "Ada").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, Account::with_random_id("Ada").unwrap());
    }

    #[test]
    fn test_json_round_trip() {
        let account = Account::with_random_id("Grace").unwrap();
        let json = serde_json::to_string(&account).unwrap();
        let back: Account = serde_json::from_str(&json).unwrap();
        assert_eq!(back, account);
    }
}
