mod render;
mod sink;

use anyhow::Result;

use crate::db::Database;
use crate::models::ReportRequest;

/// Run one report: select the matching expenses, render them in the requested
/// format, write the result to the request's output path.
///
/// Rendering completes in memory before the sink is touched, so a failed or
/// unsupported render never leaves a file behind.
pub(crate) fn generate(db: &Database, request: &ReportRequest) -> Result<()> {
    let expenses = db.find_expenses(request.start, request.end, request.category.as_deref())?;
    log::info!(
        "Selected {} expense(s) between {} and {}",
        expenses.len(),
        request.start,
        request.end
    );

    let content = render::render(&expenses, request)?;
    sink::write_report(&request.output_path, &content)?;
    log::info!(
        "Wrote {} report to {}",
        request.format,
        request.output_path.display()
    );
    Ok(())
}
