use crate::domain::{Book, Member};
use crate::ports::notifier::{Notifier, Result};
use async_trait::async_trait;
use chrono::NaiveDate;

/// ログに書き出すだけの通知実装
///
/// 会員には何も送らず、各通知を`tracing`のinfoイベントとして記録する。
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingNotifier;

impl LoggingNotifier {
    pub fn new() -> Self {
        Self
    }
}

fn title_of(book: &Book) -> &str {
    book.title.as_deref().unwrap_or("(unknown)")
}

#[async_trait]
impl Notifier for LoggingNotifier {
    async fn notify_checkout(
        &self,
        member: &Member,
        book: &Book,
        due_date: NaiveDate,
    ) -> Result<()> {
        tracing::info!(
            member = %member.email,
            isbn = %book.isbn,
            "Notification for {}: Book checked out: {}. Due date: {}",
            member.name,
            title_of(book),
            due_date
        );
        Ok(())
    }

    async fn notify_return(&self, member: &Member, book: &Book, late_fee: f64) -> Result<()> {
        tracing::info!(
            member = %member.email,
            isbn = %book.isbn,
            "Notification for {}: Book returned: {}. Late fee: {}",
            member.name,
            title_of(book),
            late_fee
        );
        Ok(())
    }
}
