use crate::domain::money::{Currency, Money};
use crate::domain::ports::{AccountError, AuthorizationError};
use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T, E = WithdrawalError> = std::result::Result<T, E>;

/// Failure of a single `withdraw` call.
///
/// The variants mirror the order in which the terminal checks a request:
/// currency first, then credentials, then banknote availability, then the
/// account charge. A failing call never mutates the cash deposit.
#[derive(Error, Debug)]
pub enum WithdrawalError {
    #[error("terminal dispenses {expected}, requested {requested}")]
    WrongCurrency {
        requested: Currency,
        expected: Currency,
    },
    #[error("bank rejected the credentials")]
    Authorization(#[from] AuthorizationError),
    #[error("{0} cannot be dispensed with the available banknotes")]
    WrongAmount(Money),
    #[error("bank refused the charge")]
    NoFundsOnAccount(#[from] AccountError),
}

/// Rejected construction or loading of a domain value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("monetary amount cannot be negative: {0}")]
    NegativeAmount(Decimal),
    #[error("PIN must consist of four decimal digits")]
    InvalidPinDigit,
    #[error("{found} banknotes cannot be held in a {expected} deposit")]
    ForeignBanknote { found: Currency, expected: Currency },
    #[error("deposit currency {loaded} does not match terminal currency {terminal}")]
    DepositCurrencyMismatch { loaded: Currency, terminal: Currency },
}
