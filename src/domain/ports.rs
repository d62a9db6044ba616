use super::auth::{AuthorizationToken, Card, PinCode};
use super::money::Money;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationError {
    #[error("card is not known to the bank")]
    UnknownCard,
    #[error("PIN does not match the card")]
    WrongPin,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountError {
    #[error("not enough funds on the account")]
    InsufficientFunds,
    #[error("authorization token is unknown or already spent")]
    InvalidToken,
}

/// The banking backend a terminal delegates to.
///
/// `authorize` validates the PIN/card pair and yields a token good for one
/// charge; `charge` debits the account behind that token. Everything beyond
/// this contract (networking, retries, account rules) lives behind the
/// implementation.
pub trait Bank {
    fn authorize(
        &self,
        pin: &PinCode,
        card: &Card,
    ) -> Result<AuthorizationToken, AuthorizationError>;

    fn charge(&self, token: &AuthorizationToken, amount: &Money) -> Result<(), AccountError>;
}
