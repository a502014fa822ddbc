//! 蔵書スナップショットから人が読むためのレポートを生成する。
//!
//! 生成は読み取りのみで、呼び出しのたびにスナップショットを取り直す。
//! 同じスナップショットと同じ「今日」からは常に同じ文字列が得られる。

mod availability;
mod overdue;

pub use availability::{generate_availability_report, render_availability_report};
pub use overdue::{generate_overdue_report, render_overdue_report};

use crate::domain::Book;
use crate::ports::{BookStore, Clock};
use std::cmp::Ordering;
use std::sync::Arc;
use thiserror::Error;

/// レポート生成のエラー
#[derive(Debug, Error)]
pub enum ReportError {
    /// BookStoreのエラー
    #[error("Book store error")]
    BookStore(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Unknown report kind: {0}")]
    UnknownReportKind(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;

/// レポート生成の依存関係
#[derive(Clone)]
pub struct ReportDependencies {
    pub book_store: Arc<dyn BookStore>,
    pub clock: Arc<dyn Clock>,
}

/// レポートの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Availability,
    Overdue,
}

impl std::str::FromStr for ReportKind {
    type Err = ReportError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "availability" => Ok(ReportKind::Availability),
            "overdue" => Ok(ReportKind::Overdue),
            _ => Err(ReportError::UnknownReportKind(s.to_string())),
        }
    }
}

/// 種類を指定してレポートを生成する
pub async fn generate_report(deps: &ReportDependencies, kind: ReportKind) -> Result<String> {
    match kind {
        ReportKind::Availability => generate_availability_report(deps).await,
        ReportKind::Overdue => generate_overdue_report(deps).await,
    }
}

async fn snapshot(deps: &ReportDependencies) -> Result<Vec<Book>> {
    deps.book_store
        .all_books()
        .await
        .map_err(ReportError::BookStore)
}

const UNKNOWN: &str = "(unknown)";

/// ISBNは空白のみでも欠損として扱う
fn isbn_or_unknown(isbn: &str) -> &str {
    if isbn.trim().is_empty() {
        UNKNOWN
    } else {
        isbn
    }
}

/// "- {title} by {author} (ISBN: {isbn})"
fn book_line(book: &Book) -> String {
    format!(
        "- {} by {} (ISBN: {})",
        book.title.as_deref().unwrap_or(UNKNOWN),
        book.author.as_deref().unwrap_or(UNKNOWN),
        isbn_or_unknown(&book.isbn)
    )
}

/// タイトルの大文字小文字を無視した比較（タイトルなしは空文字扱い）
fn compare_titles(a: &Book, b: &Book) -> Ordering {
    let key = |book: &Book| book.title.as_deref().unwrap_or_default().to_lowercase();
    key(a).cmp(&key(b))
}
