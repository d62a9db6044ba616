use super::money::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A banknote denomination recognized for one of the supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Banknote {
    Pln10,
    Pln20,
    Pln50,
    Pln100,
    Pln200,
    Pln500,
    Usd1,
    Usd2,
    Usd5,
    Usd10,
    Usd20,
    Usd50,
    Usd100,
}

const PLN_DESCENDING: [Banknote; 6] = [
    Banknote::Pln500,
    Banknote::Pln200,
    Banknote::Pln100,
    Banknote::Pln50,
    Banknote::Pln20,
    Banknote::Pln10,
];

const USD_DESCENDING: [Banknote; 7] = [
    Banknote::Usd100,
    Banknote::Usd50,
    Banknote::Usd20,
    Banknote::Usd10,
    Banknote::Usd5,
    Banknote::Usd2,
    Banknote::Usd1,
];

impl Banknote {
    /// The denominations of `currency`, highest face value first.
    ///
    /// This is the iteration order of the greedy allocation pass.
    pub fn descending_for(currency: Currency) -> &'static [Banknote] {
        match currency {
            Currency::Pln => &PLN_DESCENDING,
            Currency::Usd => &USD_DESCENDING,
        }
    }

    pub fn currency(&self) -> Currency {
        match self {
            Banknote::Pln10
            | Banknote::Pln20
            | Banknote::Pln50
            | Banknote::Pln100
            | Banknote::Pln200
            | Banknote::Pln500 => Currency::Pln,
            Banknote::Usd1
            | Banknote::Usd2
            | Banknote::Usd5
            | Banknote::Usd10
            | Banknote::Usd20
            | Banknote::Usd50
            | Banknote::Usd100 => Currency::Usd,
        }
    }

    pub fn face(&self) -> u32 {
        match self {
            Banknote::Pln10 => 10,
            Banknote::Pln20 => 20,
            Banknote::Pln50 => 50,
            Banknote::Pln100 => 100,
            Banknote::Pln200 => 200,
            Banknote::Pln500 => 500,
            Banknote::Usd1 => 1,
            Banknote::Usd2 => 2,
            Banknote::Usd5 => 5,
            Banknote::Usd10 => 10,
            Banknote::Usd20 => 20,
            Banknote::Usd50 => 50,
            Banknote::Usd100 => 100,
        }
    }

    pub fn face_value(&self) -> Decimal {
        Decimal::from(self.face())
    }
}

/// A bundle of identical banknotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BanknotesPack {
    count: u32,
    banknote: Banknote,
}

impl BanknotesPack {
    pub fn new(count: u32, banknote: Banknote) -> Self {
        Self { count, banknote }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn banknote(&self) -> Banknote {
        self.banknote
    }

    /// Total face value of the bundle.
    pub fn value(&self) -> Decimal {
        self.banknote.face_value() * Decimal::from(self.count)
    }

    pub(crate) fn add(&mut self, count: u32) {
        self.count += count;
    }

    // Caller guarantees `count <= self.count`; the allocation pass never
    // hands out more notes than a pack holds.
    pub(crate) fn take(&mut self, count: u32) {
        debug_assert!(count <= self.count);
        self.count -= count;
    }
}
