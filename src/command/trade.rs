use chrono::NaiveDate;
use log::debug;
use crate::common::{LedgerError, LedgerResult};
use crate::db::Database;
use crate::transaction::{parse_quantity, TradeType, Transaction};

/// Validate and append a trade dated `today`, then write the store back.
/// Nothing is persisted when amount or price is invalid, or when their product does not fit
/// in a `Decimal`.
pub(crate) fn record_trade(db: &mut Database, trade_type: TradeType, amount: &str, price: &str, today: NaiveDate) -> LedgerResult<Transaction> {
    let amount = parse_quantity("amount", amount)?;
    let price = parse_quantity("price", price)?;

    let t = Transaction::new(trade_type, amount, price, today);
    if t.notional().is_none() {
        return Err(LedgerError::InvalidInput(format!("{amount} x {price} is too large to record")));
    }

    debug!("Recording {} of {} @ {}", trade_type, amount, price);
    db.append(t.clone());
    db.save()?;

    Ok(t)
}
