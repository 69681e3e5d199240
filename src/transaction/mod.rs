use std::fmt;
use std::str::FromStr;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::common::{LedgerError, LedgerResult};
use crate::util::{month_index, week_of};

/// Direction of a trade
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum TradeType {
    Buy,
    Sell,
}

impl fmt::Display for TradeType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TradeType::Buy => write!(f, "buy"),
            TradeType::Sell => write!(f, "sell"),
        }
    }
}

/// A single buy or sell, as stored on disk. Records are never changed once written.
/// Amount and price are written as JSON numbers carrying every stored digit.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub(crate) struct Transaction {
    #[serde(rename = "type")]
    pub(crate) trade_type: TradeType,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub(crate) amount: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub(crate) price: Decimal,
    pub(crate) date: NaiveDate,

    /// ISO week of `date`
    pub(crate) week: u32,

    /// Zero-indexed month of `date`
    pub(crate) month: u32,
}

impl Transaction {
    /// Create a record dated `date`, deriving week and month from it.
    pub(crate) fn new(trade_type: TradeType, amount: Decimal, price: Decimal, date: NaiveDate) -> Transaction {
        Transaction {
            trade_type,
            amount,
            price,
            date,
            week: week_of(date),
            month: month_index(date),
        }
    }

    /// Traded value, price times amount. `None` when it does not fit in a `Decimal`.
    pub(crate) fn notional(&self) -> Option<Decimal> {
        self.price.checked_mul(self.amount)
    }
}

/// Parse a user supplied amount or price. Only strictly positive numbers are accepted.
pub(crate) fn parse_quantity(field: &str, value: &str) -> LedgerResult<Decimal> {
    let trimmed = value.trim();
    let parsed = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| LedgerError::InvalidInput(format!("{field} '{value}' is not a number")))?;

    if parsed <= Decimal::ZERO {
        return Err(LedgerError::InvalidInput(format!("{field} must be greater than zero, got {value}")));
    }

    Ok(parsed)
}
