use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use crate::common::LedgerResult;
use crate::db::Database;
use crate::profit::{profit_breakdown, ProfitBreakdown};
use crate::window::Window;

/// Profit of each requested window, in the order given
pub(crate) fn execute_calc(db: &Database, windows: &[Window], today: NaiveDate) -> LedgerResult<Vec<(Window, ProfitBreakdown)>> {
    windows.iter()
        .map(|window| {
            let transactions = window.select(db.transactions(), today);
            debug!("{:?} window has {} transactions", window, transactions.len());
            Ok((*window, profit_breakdown(&transactions)?))
        })
        .collect()
}

/// Format a profit, fee or notional total with two decimal places
pub(crate) fn format_profit(amount: Decimal) -> String {
    format!("{amount:.2}")
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::str::FromStr;
    use crate::common::LedgerError;
    use crate::transaction::{TradeType, Transaction};
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_execute_calc() {
        let monday = NaiveDate::from_ymd_opt(2024, 5, 13).unwrap();
        let wednesday = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
        let last_month = NaiveDate::from_ymd_opt(2024, 4, 2).unwrap();

        let mut db = Database::new(PathBuf::from("unused.json"));
        db.append(Transaction::new(TradeType::Buy, dec("100"), dec("10"), last_month));
        db.append(Transaction::new(TradeType::Buy, dec("50"), dec("5"), monday));
        db.append(Transaction::new(TradeType::Sell, dec("100"), dec("11"), wednesday));

        let results = execute_calc(&db, &[Window::Today, Window::Week, Window::All], wednesday).unwrap();
        let profits: Vec<(Window, Decimal)> = results.iter().map(|(w, b)| (*w, b.profit)).collect();
        assert_eq!(profits, vec![
            // 1100 - 0.22 - 1.1
            (Window::Today, dec("1098.68")),
            // 1100 - 250 - (1350 * 0.0002 + 1.1)
            (Window::Week, dec("848.63")),
            (Window::All, dec("-151.57")),
        ]);
    }

    #[test]
    fn test_no_windows() {
        let db = Database::new(PathBuf::from("unused.json"));
        assert!(execute_calc(&db, &[], NaiveDate::from_ymd_opt(2024, 5, 13).unwrap()).unwrap().is_empty());
    }

    #[test]
    fn test_overflow_reported() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 13).unwrap();
        let huge = Decimal::from_scientific("1e15").unwrap();
        let mut db = Database::new(PathBuf::from("unused.json"));
        db.append(Transaction::new(TradeType::Buy, huge, huge, today));

        let result = execute_calc(&db, &[Window::All], today);
        assert!(matches!(result, Err(LedgerError::Overflow(_))));
    }

    #[test]
    fn test_format_profit() {
        assert_eq!(format_profit(dec("98.48")), "98.48");
        assert_eq!(format_profit(dec("-250.05")), "-250.05");
        assert_eq!(format_profit(Decimal::ZERO), "0.00");
        assert_eq!(format_profit(dec("12.5")), "12.50");
    }
}
