//! Raw store records
//!
//! Backends hand back loosely typed rows. Every row passes through
//! [`RawRecord::parse`] before anything else sees it, so aggregation only ever
//! works with well-formed [`Transaction`] values.

use chrono::NaiveDate;

use crate::error::{FinDashError, FinDashResult};
use crate::models::{Money, Transaction, TransactionKind};

/// Date format used by both backends
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Amount as found in the backing store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawAmount {
    /// Integer cents (sqlite)
    Cents(i64),
    /// Decimal text such as "1500.00" (sheet)
    Text(String),
}

/// A row as read from a backend, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub id: Option<String>,
    pub date: Option<String>,
    pub kind: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub amount: Option<RawAmount>,
}

impl RawRecord {
    /// Convert into a transaction, rejecting missing or ill-typed fields
    pub fn parse(self) -> FinDashResult<Transaction> {
        let id = required(self.id, "id")?;
        let id: i64 = id
            .parse()
            .map_err(|_| FinDashError::malformed(format!("invalid id '{}'", id)))?;

        let date = parse_date(&required(self.date, "date")?)?;

        let kind: TransactionKind = required(self.kind, "kind")?
            .parse()
            .map_err(|e: FinDashError| FinDashError::malformed(e.to_string()))?;

        let category = required(self.category, "category")?;

        let amount = match self.amount {
            None => return Err(FinDashError::malformed("missing amount")),
            Some(RawAmount::Cents(cents)) => Money::from_cents(cents),
            Some(RawAmount::Text(text)) => Money::parse(&text).map_err(|e| {
                FinDashError::malformed(format!("invalid amount '{}': {}", text, e))
            })?,
        };

        if amount.is_negative() {
            return Err(FinDashError::malformed(format!(
                "negative amount {}",
                amount
            )));
        }

        if amount > Money::MAX_TRANSACTION {
            return Err(FinDashError::malformed(format!(
                "amount {} above the maximum {}",
                amount,
                Money::MAX_TRANSACTION
            )));
        }

        Ok(Transaction {
            id,
            date,
            kind,
            category,
            description: self.description.unwrap_or_default().trim().to_string(),
            amount,
        })
    }
}

/// A present, non-blank field value
fn required(value: Option<String>, field: &str) -> FinDashResult<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(FinDashError::malformed(format!("missing {}", field))),
    }
}

/// Parse a stored date, tolerating a trailing time component
fn parse_date(value: &str) -> FinDashResult<NaiveDate> {
    let date_part = value.split(|c| c == ' ' || c == 'T').next().unwrap_or(value);
    NaiveDate::parse_from_str(date_part, DATE_FORMAT)
        .map_err(|_| FinDashError::malformed(format!("invalid date '{}'", value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> RawRecord {
        RawRecord {
            id: Some("3".into()),
            date: Some("2024-05-15".into()),
            kind: Some("expense".into()),
            category: Some("Moradia".into()),
            description: None,
            amount: Some(RawAmount::Text("1600.00".into())),
        }
    }

    #[test]
    fn test_parse_valid_record() {
        let txn = valid().parse().unwrap();
        assert_eq!(txn.id, 3);
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2024, 5, 15).unwrap());
        assert_eq!(txn.kind, TransactionKind::Expense);
        assert_eq!(txn.category, "Moradia");
        assert_eq!(txn.description, "");
        assert_eq!(txn.amount.cents(), 160_000);
    }

    #[test]
    fn test_parse_cents_and_timestamps() {
        let record = RawRecord {
            date: Some("2024-05-01 00:00:00".into()),
            kind: Some("Receita".into()),
            amount: Some(RawAmount::Cents(500_000)),
            ..valid()
        };
        let txn = record.parse().unwrap();
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert!(txn.is_income());
        assert_eq!(txn.amount.cents(), 500_000);
    }

    #[test]
    fn test_missing_fields_rejected() {
        let record = RawRecord {
            category: Some("   ".into()),
            ..valid()
        };
        let err = record.parse().unwrap_err();
        assert_eq!(err.to_string(), "Malformed record: missing category");

        let record = RawRecord {
            amount: None,
            ..valid()
        };
        assert!(record.parse().is_err());
    }

    #[test]
    fn test_bad_values_rejected() {
        let cases = [
            RawRecord {
                id: Some("x1".into()),
                ..valid()
            },
            RawRecord {
                date: Some("15/05/2024".into()),
                ..valid()
            },
            RawRecord {
                kind: Some("transfer".into()),
                ..valid()
            },
            RawRecord {
                amount: Some(RawAmount::Text("abc".into())),
                ..valid()
            },
            RawRecord {
                amount: Some(RawAmount::Cents(-1)),
                ..valid()
            },
            RawRecord {
                amount: Some(RawAmount::Text("50000000000000000".into())),
                ..valid()
            },
            RawRecord {
                amount: Some(RawAmount::Cents(i64::MAX)),
                ..valid()
            },
        ];

        for record in cases {
            let err = record.clone().parse().unwrap_err();
            assert!(
                matches!(err, FinDashError::MalformedRecord { .. }),
                "expected malformed record for {:?}",
                record
            );
        }
    }
}
