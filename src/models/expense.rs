use chrono::NaiveDate;
use rust_decimal::Decimal;

/// One expense entry. Immutable for the duration of a report run; `id` is
/// assigned by the store on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: Option<i64>,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub category: String,
}

impl Expense {
    pub fn new(date: NaiveDate, amount: Decimal, category: String) -> Self {
        Self {
            id: None,
            date,
            amount,
            category,
        }
    }
}
