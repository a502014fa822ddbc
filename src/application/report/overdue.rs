use crate::domain::Book;
use chrono::NaiveDate;

use super::{ReportDependencies, Result, book_line, compare_titles, snapshot};

const HEADER: &str = "Overdue Books Report\n---------------------\n";

/// 延滞中の書籍のレポートを生成する
#[tracing::instrument(skip(deps))]
pub async fn generate_overdue_report(deps: &ReportDependencies) -> Result<String> {
    let today = deps.clock.today();
    let books = snapshot(deps).await?;
    Ok(render_overdue_report(&books, today))
}

/// 返却期限が今日より前の貸出中書籍を、期限の古い順・同じ期限ならタイトル順に並べる
pub fn render_overdue_report(books: &[Book], today: NaiveDate) -> String {
    let mut overdue: Vec<(&Book, NaiveDate)> = books
        .iter()
        .filter(|b| b.is_checked_out())
        .filter_map(|b| b.due_date.map(|due| (b, due)))
        .filter(|(_, due)| *due < today)
        .collect();

    if overdue.is_empty() {
        return format!("{HEADER}No overdue books as of {today}.");
    }

    overdue.sort_by(|(a, a_due), (b, b_due)| a_due.cmp(b_due).then_with(|| compare_titles(a, b)));

    let blocks = overdue
        .iter()
        .map(|(book, due)| {
            let days_late = (today - *due).num_days();
            let borrower = book
                .checked_out_by
                .as_deref()
                .unwrap_or("(unknown borrower)");
            format!(
                "{}\n  Due: {due}  ({days_late} days late)\n  Borrower: {borrower}",
                book_line(book)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "{HEADER}As of: {today}\nTotal Overdue: {}\n\n{blocks}\n",
        overdue.len()
    )
}
