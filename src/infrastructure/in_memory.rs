use crate::domain::auth::{AuthorizationToken, Card, PinCode};
use crate::domain::money::Money;
use crate::domain::ports::{AccountError, AuthorizationError, Bank};
use parking_lot::Mutex;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;

/// An in-process bank backed by a mutable ledger.
///
/// Clones share the same ledger, so a terminal and a test (or an embedding
/// application) can observe one another's effects. Each successful
/// authorization issues a fresh token; a token is spent by its charge.
#[derive(Default, Clone)]
pub struct InMemoryBank {
    inner: Arc<Mutex<Ledger>>,
}

#[derive(Default)]
struct Ledger {
    accounts: HashMap<String, Account>,
    // token -> card number of the authorized account
    tokens: HashMap<String, String>,
    issued: u64,
}

struct Account {
    pin: PinCode,
    balance: Decimal,
}

impl InMemoryBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_account(&self, card: &Card, pin: PinCode, balance: Decimal) {
        let mut ledger = self.inner.lock();
        ledger
            .accounts
            .insert(card.number().to_owned(), Account { pin, balance });
    }

    pub fn balance_of(&self, card: &Card) -> Option<Decimal> {
        let ledger = self.inner.lock();
        ledger
            .accounts
            .get(card.number())
            .map(|account| account.balance)
    }
}

impl Bank for InMemoryBank {
    fn authorize(
        &self,
        pin: &PinCode,
        card: &Card,
    ) -> Result<AuthorizationToken, AuthorizationError> {
        let mut ledger = self.inner.lock();
        let account = ledger
            .accounts
            .get(card.number())
            .ok_or(AuthorizationError::UnknownCard)?;
        if account.pin != *pin {
            return Err(AuthorizationError::WrongPin);
        }

        ledger.issued += 1;
        let token = format!("tok-{:08}", ledger.issued);
        ledger.tokens.insert(token.clone(), card.number().to_owned());
        Ok(AuthorizationToken::new(token))
    }

    fn charge(&self, token: &AuthorizationToken, amount: &Money) -> Result<(), AccountError> {
        let mut ledger = self.inner.lock();
        let card_number = ledger
            .tokens
            .remove(token.as_str())
            .ok_or(AccountError::InvalidToken)?;
        let account = ledger
            .accounts
            .get_mut(&card_number)
            .ok_or(AccountError::InvalidToken)?;
        if account.balance < amount.amount() {
            return Err(AccountError::InsufficientFunds);
        }
        account.balance -= amount.amount();
        Ok(())
    }
}
