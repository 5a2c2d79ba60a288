mod expense;
mod request;

pub use expense::Expense;
pub use request::{ReportFormat, ReportRequest};

#[cfg(test)]
mod tests;
