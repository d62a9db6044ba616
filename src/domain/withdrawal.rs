use super::banknote::BanknotesPack;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// The banknotes dispensed by a successful withdrawal.
///
/// Packs are normalized on construction (zero-count packs dropped, rest
/// sorted by descending face value), so equality does not depend on the
/// order the allocation produced them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Withdrawal {
    banknotes: Vec<BanknotesPack>,
}

impl Withdrawal {
    pub fn new(mut banknotes: Vec<BanknotesPack>) -> Self {
        banknotes.retain(|pack| pack.count() > 0);
        banknotes.sort_by_key(|pack| Reverse(pack.banknote().face()));
        Self { banknotes }
    }

    /// The empty withdrawal, dispensed for zero-amount requests.
    pub fn empty() -> Self {
        Self { banknotes: Vec::new() }
    }

    pub fn banknotes(&self) -> &[BanknotesPack] {
        &self.banknotes
    }

    pub fn is_empty(&self) -> bool {
        self.banknotes.is_empty()
    }

    pub fn total_value(&self) -> Decimal {
        self.banknotes.iter().map(BanknotesPack::value).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::banknote::Banknote;
    use rust_decimal_macros::dec;

    #[test]
    fn test_equality_ignores_pack_order() {
        let a = Withdrawal::new(vec![
            BanknotesPack::new(1, Banknote::Pln10),
            BanknotesPack::new(2, Banknote::Pln200),
        ]);
        let b = Withdrawal::new(vec![
            BanknotesPack::new(2, Banknote::Pln200),
            BanknotesPack::new(1, Banknote::Pln10),
        ]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_equality_ignores_zero_count_packs() {
        let a = Withdrawal::new(vec![
            BanknotesPack::new(1, Banknote::Pln50),
            BanknotesPack::new(0, Banknote::Pln20),
        ]);
        let b = Withdrawal::new(vec![BanknotesPack::new(1, Banknote::Pln50)]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_total_value() {
        let withdrawal = Withdrawal::new(vec![
            BanknotesPack::new(1, Banknote::Pln200),
            BanknotesPack::new(3, Banknote::Pln20),
        ]);
        assert_eq!(withdrawal.total_value(), dec!(260));
    }

    #[test]
    fn test_empty_withdrawal() {
        assert!(Withdrawal::empty().is_empty());
        assert_eq!(Withdrawal::empty().total_value(), dec!(0));
        assert_eq!(
            Withdrawal::empty(),
            Withdrawal::new(vec![BanknotesPack::new(0, Banknote::Pln10)])
        );
    }
}
