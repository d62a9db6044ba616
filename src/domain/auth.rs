use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A four-digit personal identification number.
///
/// `Debug` redacts the digits so PINs never leak through logs; there is
/// deliberately no serde support either.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PinCode {
    digits: [u8; 4],
}

impl PinCode {
    pub fn new(digits: [u8; 4]) -> Result<Self, DomainError> {
        if digits.iter().any(|&digit| digit > 9) {
            return Err(DomainError::InvalidPinDigit);
        }
        Ok(Self { digits })
    }

    pub fn digits(&self) -> [u8; 4] {
        self.digits
    }
}

impl fmt::Debug for PinCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PinCode(****)")
    }
}

/// An opaque card/account number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    number: String,
}

impl Card {
    pub fn new(number: impl Into<String>) -> Self {
        Self { number: number.into() }
    }

    pub fn number(&self) -> &str {
        &self.number
    }
}

/// Proof of a successful authorization, spent by a single charge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthorizationToken(String);

impl AuthorizationToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
