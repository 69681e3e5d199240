use rust_decimal::{Decimal, RoundingStrategy};
use crate::common::{LedgerError, LedgerResult};
use crate::transaction::{TradeType, Transaction};

/// Commission charged on both directions, 2 basis points of notional
const COMMISSION_RATE: Decimal = Decimal::from_parts(2, 0, 0, false, 4);

/// Tax charged on sells only, 0.1% of sell notional
const SELL_TAX_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 3);

/// Intermediate sums behind a profit figure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ProfitBreakdown {
    pub(crate) buy_sum: Decimal,
    pub(crate) sell_sum: Decimal,
    pub(crate) fee: Decimal,
    pub(crate) profit: Decimal,
}

/// Buy and sell sums, fee and profit of `transactions`. Sums that do not fit in a `Decimal`
/// are reported as `LedgerError::Overflow`.
pub(crate) fn profit_breakdown(transactions: &[Transaction]) -> LedgerResult<ProfitBreakdown> {
    let overflow = |what: &str| LedgerError::Overflow(what.to_string());

    let mut buy_sum = Decimal::ZERO;
    let mut sell_sum = Decimal::ZERO;
    for t in transactions {
        let notional = t.notional()
            .ok_or_else(|| overflow(&format!("{} x {} on {}", t.amount, t.price, t.date)))?;
        let sum = match t.trade_type {
            TradeType::Buy => &mut buy_sum,
            TradeType::Sell => &mut sell_sum,
        };
        *sum = sum.checked_add(notional).ok_or_else(|| overflow(&format!("{} total", t.trade_type)))?;
    }

    let commission = sell_sum.checked_add(buy_sum).and_then(|total| total.checked_mul(COMMISSION_RATE));
    let fee = commission
        .zip(sell_sum.checked_mul(SELL_TAX_RATE))
        .and_then(|(commission, tax)| commission.checked_add(tax))
        .ok_or_else(|| overflow("fee"))?;
    let profit = sell_sum.checked_sub(buy_sum)
        .and_then(|net| net.checked_sub(fee))
        .ok_or_else(|| overflow("profit"))?
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    Ok(ProfitBreakdown { buy_sum, sell_sum, fee, profit })
}

/// Net realized profit of `transactions` after fees, rounded half away from zero to 2 places.
pub(crate) fn calc_profit(transactions: &[Transaction]) -> LedgerResult<Decimal> {
    Ok(profit_breakdown(transactions)?.profit)
}
