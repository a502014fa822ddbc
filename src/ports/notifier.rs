use crate::domain::{Book, Member};
use async_trait::async_trait;
use chrono::NaiveDate;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 通知ポート
///
/// 会員への通知配信メカニズムを抽象化する。
/// 実装はメール、SMS、ログ出力などが考えられる。
///
/// 呼び出し側は結果を待つが、失敗しても貸出・返却は取り消さない。
#[async_trait]
pub trait Notifier: Send + Sync {
    /// 貸出通知を送信する
    async fn notify_checkout(
        &self,
        member: &Member,
        book: &Book,
        due_date: NaiveDate,
    ) -> Result<()>;

    /// 返却通知を送信する
    async fn notify_return(&self, member: &Member, book: &Book, late_fee: f64) -> Result<()>;
}
