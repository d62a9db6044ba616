use super::banknote::{Banknote, BanknotesPack};
use super::money::Currency;
use crate::error::DomainError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The cash inventory of a terminal.
///
/// Holds exactly one pack per denomination of its currency, in descending
/// face-value order; denominations that are out of stock keep a zero-count
/// pack. The only mutation on the withdrawal path is [`debit`](Self::debit),
/// applied after a successful charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyDeposit {
    currency: Currency,
    packs: Vec<BanknotesPack>,
}

impl MoneyDeposit {
    /// A deposit of `currency` with every denomination out of stock.
    pub fn empty(currency: Currency) -> Self {
        let packs = Banknote::descending_for(currency)
            .iter()
            .map(|&banknote| BanknotesPack::new(0, banknote))
            .collect();
        Self { currency, packs }
    }

    /// Builds a deposit from loose packs.
    ///
    /// Packs of the same denomination are merged; a banknote of another
    /// currency is rejected.
    pub fn new(currency: Currency, packs: Vec<BanknotesPack>) -> Result<Self, DomainError> {
        let mut deposit = Self::empty(currency);
        for pack in packs {
            if pack.banknote().currency() != currency {
                return Err(DomainError::ForeignBanknote {
                    found: pack.banknote().currency(),
                    expected: currency,
                });
            }
            if let Some(held) = deposit.pack_mut(pack.banknote()) {
                held.add(pack.count());
            }
        }
        Ok(deposit)
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Banknotes in stock for `banknote`; zero for foreign denominations.
    pub fn available(&self, banknote: Banknote) -> u32 {
        self.packs
            .iter()
            .find(|pack| pack.banknote() == banknote)
            .map(BanknotesPack::count)
            .unwrap_or(0)
    }

    pub fn packs(&self) -> &[BanknotesPack] {
        &self.packs
    }

    pub fn total_value(&self) -> Decimal {
        self.packs.iter().map(BanknotesPack::value).sum()
    }

    /// Removes the dispensed packs from stock.
    ///
    /// The packs must come from an allocation computed against this deposit,
    /// which caps every count at the available stock.
    pub(crate) fn debit(&mut self, dispensed: &[BanknotesPack]) {
        for pack in dispensed {
            if let Some(held) = self.pack_mut(pack.banknote()) {
                held.take(pack.count());
            }
        }
    }

    fn pack_mut(&mut self, banknote: Banknote) -> Option<&mut BanknotesPack> {
        self.packs.iter_mut().find(|pack| pack.banknote() == banknote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_deposit_has_zero_pack_per_denomination() {
        let deposit = MoneyDeposit::empty(Currency::Pln);
        assert_eq!(deposit.packs().len(), Banknote::descending_for(Currency::Pln).len());
        assert_eq!(deposit.total_value(), dec!(0));
    }

    #[test]
    fn test_new_merges_packs_of_same_denomination() {
        let deposit = MoneyDeposit::new(
            Currency::Pln,
            vec![
                BanknotesPack::new(3, Banknote::Pln100),
                BanknotesPack::new(2, Banknote::Pln100),
            ],
        )
        .unwrap();

        assert_eq!(deposit.available(Banknote::Pln100), 5);
        assert_eq!(deposit.total_value(), dec!(500));
    }

    #[test]
    fn test_new_rejects_foreign_banknotes() {
        let result = MoneyDeposit::new(Currency::Pln, vec![BanknotesPack::new(1, Banknote::Usd20)]);
        assert_eq!(
            result,
            Err(DomainError::ForeignBanknote {
                found: Currency::Usd,
                expected: Currency::Pln,
            })
        );
    }

    #[test]
    fn test_available_is_zero_for_foreign_denomination() {
        let deposit = MoneyDeposit::empty(Currency::Pln);
        assert_eq!(deposit.available(Banknote::Usd100), 0);
    }

    #[test]
    fn test_debit_removes_dispensed_notes() {
        let mut deposit = MoneyDeposit::new(
            Currency::Pln,
            vec![
                BanknotesPack::new(4, Banknote::Pln50),
                BanknotesPack::new(1, Banknote::Pln10),
            ],
        )
        .unwrap();

        deposit.debit(&[BanknotesPack::new(3, Banknote::Pln50)]);
        assert_eq!(deposit.available(Banknote::Pln50), 1);
        assert_eq!(deposit.available(Banknote::Pln10), 1);
        assert_eq!(deposit.total_value(), dec!(60));
    }

    #[test]
    fn test_deposit_serde_round_trip() {
        let deposit = MoneyDeposit::new(
            Currency::Usd,
            vec![BanknotesPack::new(7, Banknote::Usd20)],
        )
        .unwrap();

        let json = serde_json::to_string(&deposit).unwrap();
        let back: MoneyDeposit = serde_json::from_str(&json).unwrap();
        assert_eq!(back, deposit);
    }
}
