use std::path::Path;
use csv::WriterBuilder;
use log::info;
use serde::Serialize;
use crate::common::{LedgerError, LedgerResult};
use crate::db::Database;
use crate::transaction::Transaction;

/// One csv line. Decimals are written as plain text so every digit survives.
#[derive(Serialize)]
struct ExportRow {
    #[serde(rename = "type")]
    trade_type: String,
    amount: String,
    price: String,
    date: String,
    week: u32,
    month: u32,
}

impl From<&Transaction> for ExportRow {
    fn from(t: &Transaction) -> Self {
        ExportRow {
            trade_type: t.trade_type.to_string(),
            amount: t.amount.normalize().to_string(),
            price: t.price.normalize().to_string(),
            date: t.date.format("%Y-%m-%d").to_string(),
            week: t.week,
            month: t.month,
        }
    }
}

/// Export transactions to a csv file, returns the number of rows written
pub(crate) fn execute_export(db: &Database, file_path: &Path) -> LedgerResult<usize> {
    let export_error = |reason: String| LedgerError::Export { path: file_path.to_path_buf(), reason };

    let mut csv_writer = WriterBuilder::new().has_headers(true).from_path(file_path)
        .map_err(|e| export_error(e.to_string()))?;
    for t in db.transactions() {
        csv_writer.serialize(ExportRow::from(t)).map_err(|e| export_error(e.to_string()))?;
    }
    csv_writer.flush().map_err(|e| export_error(e.to_string()))?;

    info!("Exported {} transactions to {}", db.transactions().len(), file_path.display());
    Ok(db.transactions().len())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::str::FromStr;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use tempfile::TempDir;
    use crate::transaction::{TradeType, Transaction};
    use super::*;

    #[test]
    fn test_export() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("trades.csv");

        let mut db = Database::new(PathBuf::from("unused.json"));
        db.append(Transaction::new(TradeType::Buy, Decimal::from(100), Decimal::from_str("10.5").unwrap(), NaiveDate::from_ymd_opt(2024, 5, 13).unwrap()));
        db.append(Transaction::new(TradeType::Sell, Decimal::from(40), Decimal::from_str("12.75").unwrap(), NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()));

        assert_eq!(execute_export(&db, &out).unwrap(), 2);

        let content = fs::read_to_string(&out).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, vec![
            "type,amount,price,date,week,month",
            "buy,100,10.5,2024-05-13,20,4",
            "sell,40,12.75,2024-06-03,23,5",
        ]);
    }

    #[test]
    fn test_export_keeps_precision() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("trades.csv");

        let mut db = Database::new(PathBuf::from("unused.json"));
        db.append(Transaction::new(TradeType::Buy, Decimal::from_str("1234567.123456789").unwrap(), Decimal::from_str("0.1234567890123456789").unwrap(), NaiveDate::from_ymd_opt(2024, 5, 13).unwrap()));
        execute_export(&db, &out).unwrap();

        let content = fs::read_to_string(&out).unwrap();
        assert_eq!(content.lines().nth(1), Some("buy,1234567.123456789,0.1234567890123456789,2024-05-13,20,4"));
    }

    #[test]
    fn test_export_to_missing_dir() {
        let dir = TempDir::new().unwrap();
        let db = Database::new(PathBuf::from("unused.json"));
        let result = execute_export(&db, &dir.path().join("missing").join("out.csv"));
        assert!(matches!(result, Err(LedgerError::Export { .. })));
    }
}
