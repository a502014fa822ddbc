use crate::domain::Book;

use super::{ReportDependencies, Result, book_line, compare_titles, snapshot};

const HEADER: &str = "Available Books Report\n-----------------------\n";

/// 貸出可能な書籍のレポートを生成する
#[tracing::instrument(skip(deps))]
pub async fn generate_availability_report(deps: &ReportDependencies) -> Result<String> {
    let books = snapshot(deps).await?;
    Ok(render_availability_report(&books))
}

/// 貸出可能な書籍をタイトル順（大文字小文字無視、同順位はスナップショット順）に並べる
pub fn render_availability_report(books: &[Book]) -> String {
    let mut available: Vec<&Book> = books.iter().filter(|b| b.is_available()).collect();

    if available.is_empty() {
        return format!("{HEADER}No books are currently available.");
    }

    available.sort_by(|a, b| compare_titles(a, b));

    let rows = available
        .iter()
        .map(|book| book_line(book))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{HEADER}Total: {}\n\n{rows}\n", available.len())
}
