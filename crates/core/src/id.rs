//! Strongly-typed identifiers used across the domain.
//!
//! Ids here are small 1-based integers fixed by the external contract, so the
//! newtypes wrap `u64` rather than generating identifiers themselves. The
//! withdrawal sequence lives in the ledger store.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of an author.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(u64);

/// Identifier of a book.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(u64);

/// Identifier of a withdrawal request (1-based, strictly increasing).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WithdrawalId(u64);

macro_rules! impl_int_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            pub const fn get(&self) -> u64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<u64> for $t {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for u64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = u64::from_str(s)
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(raw))
            }
        }
    };
}

impl_int_newtype!(AuthorId, "AuthorId");
impl_int_newtype!(BookId, "BookId");
impl_int_newtype!(WithdrawalId, "WithdrawalId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_ids() {
        let id: AuthorId = "2".parse().unwrap();
        assert_eq!(id, AuthorId::new(2));
    }

    #[test]
    fn rejects_non_numeric_ids() {
        let err = "abc".parse::<AuthorId>().unwrap_err();
        match err {
            DomainError::InvalidId(msg) if msg.contains("AuthorId") => {}
            other => panic!("expected InvalidId, got {other:?}"),
        }
    }
}
