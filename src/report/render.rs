use crate::error::ReportError;
use crate::models::{Expense, ReportFormat, ReportRequest};

/// Short date form used for the header period and per-row dates.
const DATE_FORMAT: &str = "%m/%d/%Y";

/// Render the selected expenses in the requested format. Fails without
/// producing any output when the format has no renderer.
pub(crate) fn render(
    expenses: &[Expense],
    request: &ReportRequest,
) -> Result<String, ReportError> {
    match request.format {
        ReportFormat::Text => Ok(render_text(expenses, request)),
        ReportFormat::Csv => render_csv(expenses),
        ReportFormat::Excel | ReportFormat::Pdf => {
            Err(ReportError::UnsupportedFormat(request.format))
        }
    }
}

/// Header block followed by one tab-separated line per expense. Amounts use
/// `Decimal`'s display form: the scale they were stored with, no currency
/// symbol, no padding.
fn render_text(expenses: &[Expense], request: &ReportRequest) -> String {
    let mut out = format!(
        "Expense Report\nPeriod: {} to {}\nCategory: {}\n\nDate\t\tAmount\t\tCategory\n",
        request.start.format(DATE_FORMAT),
        request.end.format(DATE_FORMAT),
        request.category_label(),
    );
    for expense in expenses {
        out.push_str(&format!(
            "{}\t{}\t\t{}\n",
            expense.date.format(DATE_FORMAT),
            expense.amount,
            expense.category
        ));
    }
    out
}

/// `Date,Amount,Category` header plus one row per expense. Fields are written
/// unquoted (`QuoteStyle::Never`), so an embedded comma shifts the columns of
/// its row. Known limitation carried over from the original report layout.
fn render_csv(expenses: &[Expense]) -> Result<String, ReportError> {
    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(Vec::new());

    wtr.write_record(["Date", "Amount", "Category"])?;
    for expense in expenses {
        wtr.write_record([
            expense.date.format(DATE_FORMAT).to_string(),
            expense.amount.to_string(),
            expense.category.clone(),
        ])?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| ReportError::Csv(e.into_error().into()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
