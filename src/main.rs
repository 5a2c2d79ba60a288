mod db;
mod error;
mod models;
mod report;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{Expense, ReportFormat, ReportRequest};

fn main() -> Result<()> {
    env_logger::init();

    let config = db::StoreConfig::new(get_db_path()?);
    let mut db = db::Database::open(&config)?;
    ensure_sample_expenses(&mut db)?;

    let start: NaiveDate = "2024-01-01".parse()?;
    let end: NaiveDate = "2024-12-31".parse()?;
    let request = ReportRequest::new(
        start,
        end,
        "Business",
        "ExpenseReport.txt",
        ReportFormat::Text,
    );
    report::generate(&db, &request)?;

    println!("Expense report generated successfully.");
    Ok(())
}

/// Seed a small 2024 data set on first run so the reference report has rows.
fn ensure_sample_expenses(db: &mut db::Database) -> Result<()> {
    if db.expense_count()? > 0 {
        return Ok(());
    }
    db.insert_expenses_batch(&sample_expenses()?)?;
    Ok(())
}

fn sample_expenses() -> Result<Vec<Expense>> {
    let rows = [
        ("2024-01-15", "125.00", "Business"),
        ("2024-02-03", "42.75", "Travel"),
        ("2024-03-01", "10.50", "Business"),
        ("2024-04-22", "310.00", "Business"),
        ("2024-06-15", "5.00", "Travel"),
        ("2024-09-09", "89.99", "Meals"),
        ("2024-11-30", "1200.00", "Business"),
    ];
    rows.iter()
        .map(|(date, amount, category)| -> Result<Expense> {
            Ok(Expense::new(
                date.parse::<NaiveDate>()?,
                amount.parse::<Decimal>()?,
                (*category).to_string(),
            ))
        })
        .collect()
}

fn get_db_path() -> Result<std::path::PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "expensereport", "ExpenseReport")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.join("expenses.db"))
}
