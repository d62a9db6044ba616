// Not every test binary uses every helper.
#![allow(dead_code)]

use cashpoint::domain::auth::{Card, PinCode};
use cashpoint::domain::banknote::{Banknote, BanknotesPack};
use cashpoint::domain::deposit::MoneyDeposit;
use cashpoint::domain::money::{Currency, Money};
use rust_decimal::Decimal;

pub fn pin() -> PinCode {
    PinCode::new([1, 2, 3, 4]).unwrap()
}

pub fn card() -> Card {
    Card::new("123")
}

pub fn pln(amount: Decimal) -> Money {
    Money::new(amount, Currency::Pln).unwrap()
}

/// A PLN deposit holding `count` notes of every denomination.
pub fn full_pln_deposit(count: u32) -> MoneyDeposit {
    let packs = Banknote::descending_for(Currency::Pln)
        .iter()
        .map(|&banknote| BanknotesPack::new(count, banknote))
        .collect();
    MoneyDeposit::new(Currency::Pln, packs).unwrap()
}

/// A PLN deposit with the given count per denomination, highest first.
pub fn pln_deposit_from_counts(counts: &[u32]) -> MoneyDeposit {
    let packs = Banknote::descending_for(Currency::Pln)
        .iter()
        .zip(counts)
        .map(|(&banknote, &count)| BanknotesPack::new(count, banknote))
        .collect();
    MoneyDeposit::new(Currency::Pln, packs).unwrap()
}
