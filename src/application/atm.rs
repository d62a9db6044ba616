use crate::domain::auth::{Card, PinCode};
use crate::domain::banknote::{Banknote, BanknotesPack};
use crate::domain::deposit::MoneyDeposit;
use crate::domain::money::{Currency, Money};
use crate::domain::ports::Bank;
use crate::domain::withdrawal::Withdrawal;
use crate::error::{DomainError, Result, WithdrawalError};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::{debug, warn};

/// A cash-dispensing terminal.
///
/// Owns the cash deposit and delegates authorization and charging to a
/// [`Bank`]. A terminal operates in a single fixed currency; its deposit is
/// loaded separately from the withdrawal path and always matches that
/// currency.
pub struct AtmMachine<B> {
    bank: B,
    currency: Currency,
    deposit: MoneyDeposit,
}

impl<B: Bank> AtmMachine<B> {
    /// A terminal with an empty deposit of `currency`.
    pub fn new(bank: B, currency: Currency) -> Self {
        Self {
            bank,
            currency,
            deposit: MoneyDeposit::empty(currency),
        }
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn deposit(&self) -> &MoneyDeposit {
        &self.deposit
    }

    /// Replaces the cash inventory wholesale.
    ///
    /// The deposit must be in the terminal's currency, which keeps the
    /// currency check in `withdraw` equivalent for terminal and deposit.
    pub fn load_deposit(&mut self, deposit: MoneyDeposit) -> Result<(), DomainError> {
        if deposit.currency() != self.currency {
            return Err(DomainError::DepositCurrencyMismatch {
                loaded: deposit.currency(),
                terminal: self.currency,
            });
        }
        self.deposit = deposit;
        Ok(())
    }

    /// Authorizes, allocates banknotes for and charges a withdrawal request.
    ///
    /// Checks run in a fixed order: requested currency, bank authorization,
    /// banknote allocation, account charge. The deposit is decremented only
    /// after the charge succeeds, so a failing call leaves it untouched.
    pub fn withdraw(
        &mut self,
        pin: &PinCode,
        card: &Card,
        amount: Money,
    ) -> Result<Withdrawal> {
        if amount.currency() != self.currency {
            warn!(requested = %amount.currency(), expected = %self.currency, "wrong currency");
            return Err(WithdrawalError::WrongCurrency {
                requested: amount.currency(),
                expected: self.currency,
            });
        }

        let token = self
            .bank
            .authorize(pin, card)
            .inspect_err(|error| warn!(card = card.number(), %error, "authorization rejected"))?;

        let allocation = self.allocate(&amount)?;

        self.bank
            .charge(&token, &amount)
            .inspect_err(|error| warn!(card = card.number(), %error, "charge refused"))?;

        self.deposit.debit(&allocation);
        debug!(card = card.number(), %amount, "withdrawal dispensed");
        Ok(Withdrawal::new(allocation))
    }

    /// Greedy-descending banknote breakdown of `amount`.
    ///
    /// Per denomination, takes as many notes as fit into the remaining
    /// amount, capped at the available stock. No backtracking: if the pass
    /// leaves a remainder the request is not dispensable as-is, even when a
    /// different combination could have covered it.
    fn allocate(&self, amount: &Money) -> Result<Vec<BanknotesPack>> {
        let mut remaining = amount.amount();
        let mut allocation = Vec::new();
        for &banknote in Banknote::descending_for(self.currency) {
            let fitting = (remaining / banknote.face_value())
                .floor()
                .to_u32()
                .unwrap_or(u32::MAX);
            let take = fitting.min(self.deposit.available(banknote));
            if take > 0 {
                remaining -= banknote.face_value() * Decimal::from(take);
                allocation.push(BanknotesPack::new(take, banknote));
            }
        }
        if !remaining.is_zero() {
            warn!(%amount, %remaining, "amount not dispensable");
            return Err(WithdrawalError::WrongAmount(*amount));
        }
        Ok(allocation)
    }
}
